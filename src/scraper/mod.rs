pub mod driver;
pub mod models;
mod request;
mod scraper;
mod scraper_error;

pub use driver::PaginationDriver;
pub use scraper::{DaftClient, Page, PageFetcher};
pub use scraper_error::ScraperError;
