use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Selector error: {0}")]
    Selector(String),
    #[error("Template error: {0}")]
    Template(String),
}

pub type Result<T> = std::result::Result<T, RankError>;

/// Why a single page contributed no records.
#[derive(Error, Debug)]
pub enum PageError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("HTTP status {0}")]
    HttpStatus(u16),
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for PageError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => PageError::HttpStatus(status.as_u16()),
            None => PageError::Transport(err.to_string()),
        }
    }
}
