use crate::error::PageError;
use async_trait::async_trait;
use std::time::Duration;

/// Raw response body of a page that came back with a success status.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url`. Non-2xx statuses are reported as `PageError::HttpStatus`.
    async fn fetch(&self, url: &str) -> Result<FetchedPage, PageError>;
}

/// Waits between pages.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self, delay: Duration);
}
