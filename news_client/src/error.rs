use crate::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of a single news request.
#[derive(Error, Debug)]
pub enum Error {
    #[error("News endpoint answered with status {0}")]
    Status(StatusCode),
    #[error("Cannot reach news endpoint: {0}")]
    NetworkError(#[from] reqwest::Error),
    #[error("Malformed news response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    #[error("Invalid news endpoint URL: {0}")]
    InvalidBaseUrl(String),
    #[error("Cannot parse URL: {0}")]
    UrlError(#[from] url::ParseError),
    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),
}

impl Error {
    /// The request reached the endpoint but timed out waiting for it.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::NetworkError(err) if err.is_timeout())
    }
}
