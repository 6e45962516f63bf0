use crate::domain::{FetchedPage, PageFetcher};
use crate::error::PageError;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::debug;

/// Fetches listing pages over HTTP. Timeout and User-Agent come from the client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, PageError> {
        let response = self.client.get(url).send().await?.error_for_status()?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?.to_vec();

        debug!("Fetched {} bytes from {url}", body.len());

        Ok(FetchedPage {
            url: url.to_string(),
            content_type,
            body,
        })
    }
}
