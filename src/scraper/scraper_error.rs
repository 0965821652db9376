use thiserror::Error;

use crate::domain::ExtractError;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("JSON parse error: {0}")]
    JsonParse(String),

    #[error("Malformed listing at index {index}: {message}")]
    Deserialize { index: usize, message: String },

    #[error("Incomplete listing at index {index}: {source}")]
    Extract {
        index: usize,
        #[source]
        source: ExtractError,
    },
}
