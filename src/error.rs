use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("malformed filing index: {0}")]
    FilingIndex(String),

    #[error("unsupported host in '{0}': expected https://www.sec.gov or https://data.sec.gov")]
    UnsupportedHost(String),
}
