use crate::config::CrawlConfig;
use crate::domain::storage::Storage;
use crate::domain::{Manifest, RankingDataset};
use crate::error::Result;
use crate::services::scraping::ScrapingService;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

pub struct RankingService {
    config: CrawlConfig,
    scraping: ScrapingService,
    store: Option<Arc<dyn Storage>>,
}

impl RankingService {
    pub fn new(
        config: CrawlConfig,
        scraping: ScrapingService,
        store: Option<Arc<dyn Storage + 'static>>,
    ) -> Self {
        Self {
            config,
            scraping,
            store,
        }
    }

    /// Crawls every configured page, then saves the result when a store is set.
    pub async fn process(&self) -> Result<RankingDataset> {
        info!(
            "Starting university ranking crawl: {} pages from {}",
            self.config.total_pages, self.config.url_template
        );

        let dataset = self
            .scraping
            .crawl_all(&self.config.url_template, self.config.total_pages)
            .await;
        info!(
            "Crawl completed: {} records from {}/{} pages",
            dataset.len(),
            dataset.pages_succeeded(),
            dataset.pages_attempted
        );

        self.save_manifest(&dataset)?;
        Ok(dataset)
    }

    fn save_manifest(&self, dataset: &RankingDataset) -> Result<Option<PathBuf>> {
        let Some(store) = &self.store else {
            return Ok(None);
        };

        let manifest = Manifest::new(self.config.url_template.as_str(), dataset);
        store.save_manifest(&manifest).map(Some)
    }
}
