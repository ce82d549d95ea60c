use thiserror::Error;

/// Failures of the enhancement step; messages are shown to the user as-is
#[derive(Error, Debug)]
pub enum EnhanceError {
    #[error("Please enter and save your OpenAI API key first")]
    MissingApiKey,

    #[error("API key should start with \"sk-\"")]
    InvalidApiKey,

    #[error("No content found on this page. Please refresh and try again.")]
    EmptyContent,

    /// Error reported by the API, or the HTTP status line when it gave none
    #[error("AI processing failed: {0}")]
    Api(String),

    #[error("AI processing failed: {0}")]
    Network(String),

    #[error("AI processing failed: Invalid response format from OpenAI")]
    InvalidResponse,

    /// The model's reply was not the requested JSON
    #[error("AI processing failed: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<reqwest::Error> for EnhanceError {
    fn from(err: reqwest::Error) -> Self {
        EnhanceError::Network(err.to_string())
    }
}
