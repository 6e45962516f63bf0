use crate::domain::{Pacer, PageFetcher, RankingDataset, Record, UrlTemplate};
use crate::error::PageError;
use crate::infrastructure::{decode_page, PageExtractor};
use scraper::Html;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Walks listing pages one after another and collects their records.
pub struct ScrapingService {
    fetcher: Arc<dyn PageFetcher>,
    extractor: Box<dyn PageExtractor>,
    pacer: Arc<dyn Pacer>,
    delay: Duration,
}

impl ScrapingService {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        extractor: Box<dyn PageExtractor>,
        pacer: Arc<dyn Pacer>,
        delay: Duration,
    ) -> Self {
        info!("Created new Scraping service");
        Self {
            fetcher,
            extractor,
            pacer,
            delay,
        }
    }

    /// Fetches pages `1..=total_pages` in order.
    ///
    /// A page that fails to fetch or decode is logged and contributes nothing;
    /// the loop always runs to the last page. The configured delay follows
    /// every page, failed ones included.
    pub async fn crawl_all(&self, template: &UrlTemplate, total_pages: u32) -> RankingDataset {
        let mut dataset = RankingDataset::new();

        for page in 1..=total_pages {
            let page_url = template.page_url(page);
            info!("fetching page {page}: {page_url}");
            dataset.pages_attempted += 1;

            match self.scrape_page(&page_url).await {
                Ok(records) => {
                    debug!("Page {page} yielded {} records", records.len());
                    dataset.extend_page(records);
                }
                Err(err) => {
                    warn!("failed to crawl page {page_url}: {err}");
                    dataset.mark_failed(page);
                }
            }

            self.pacer.pause(self.delay).await;
        }

        dataset
    }

    async fn fetch_document(&self, url: &str) -> Result<Html, PageError> {
        let page = self.fetcher.fetch(url).await?;
        let text = decode_page(&page)?;
        Ok(Html::parse_document(&text))
    }

    async fn scrape_page(&self, url: &str) -> Result<Vec<Record>, PageError> {
        let document = self.fetch_document(url).await?;
        Ok(self.extractor.extract(&document))
    }
}
