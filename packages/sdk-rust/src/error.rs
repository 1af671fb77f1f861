use thiserror::Error;

pub type SdkResult<T> = Result<T, BitvavoError>;

#[derive(Debug, Error)]
pub enum BitvavoError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("query encoding error: {0}")]
    QueryEncoding(#[from] serde_urlencoded::ser::Error),

    #[error("bitvavo API error ({code}): {message}")]
    Api { message: String, code: i64 },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl BitvavoError {
    /// Returns the exchange error code if this is an API-level rejection.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}
