// errors.rs
use thiserror::Error;

/// Failures while writing the listing table to disk.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workbook error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Invalid delimiter {0:?}")]
    Delimiter(char),
}
