pub mod export_csv;
pub mod export_xlsx;
pub mod table;

pub use export_csv::export_listings_delimited;
pub use export_xlsx::export_listings_xlsx;
pub use table::ListingTable;

use crate::config::{ExportConfig, ExportFormat};
use crate::errors::ExportError;

/// Writes the table wherever `export` points.
pub fn export_table(table: &ListingTable, export: &ExportConfig) -> Result<(), ExportError> {
    match export.format {
        ExportFormat::Delimited { delimiter } => {
            export_listings_delimited(table, &export.path, delimiter)
        }
        ExportFormat::Xlsx => export_listings_xlsx(table, &export.path),
    }
}
