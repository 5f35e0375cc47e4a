use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Failed to fetch {url}, status: {status}")]
    StatusError {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl FetchError {
    /// Errors that point at a code or configuration defect rather than a
    /// transient network condition. These are never retried or swallowed.
    pub fn is_fatal(&self) -> bool {
        matches!(self, FetchError::InvalidUrl(_) | FetchError::InvalidConfig(_))
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
