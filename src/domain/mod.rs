pub mod listing;
pub mod paging;

pub use listing::{ExtractError, ListingRecord, ResultSet};
pub use paging::PageOffset;
