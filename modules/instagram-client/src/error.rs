use thiserror::Error;

pub type Result<T> = std::result::Result<T, InstagramError>;

#[derive(Debug, Error)]
pub enum InstagramError {
    #[error("Invalid Instagram post URL: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl InstagramError {
    /// Network failures and 5xx responses are worth retrying; everything
    /// else is a terminal outcome for the request that produced it.
    pub fn is_transient(&self) -> bool {
        match self {
            InstagramError::Network(_) => true,
            InstagramError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for InstagramError {
    fn from(err: reqwest::Error) -> Self {
        InstagramError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for InstagramError {
    fn from(err: serde_json::Error) -> Self {
        InstagramError::Parse(err.to_string())
    }
}
