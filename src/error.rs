use thiserror::Error;

use crate::enhance::EnhanceError;

/// Errors raised around the extraction engine (loading, capture, enhancement).
///
/// Extraction itself never fails; it degrades to empty fields instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid link exclude pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("WebDriver error: {0}")]
    WebDriver(String),

    #[error("Timed out after {0} seconds loading the page")]
    Timeout(u64),

    #[error(transparent)]
    Enhance(#[from] EnhanceError),
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::InvalidUrl(err.to_string())
    }
}

impl From<fantoccini::error::CmdError> for Error {
    fn from(err: fantoccini::error::CmdError) -> Self {
        Error::WebDriver(err.to_string())
    }
}
