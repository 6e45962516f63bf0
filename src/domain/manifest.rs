use crate::domain::{RankingDataset, Record};
use chrono::Local;
use serde::{Deserialize, Serialize};

/// What gets written to disk after a crawl.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub total_records: usize,
    pub last_updated: String,
    pub records: Vec<Record>,
    pub metadata: ManifestMetadata,
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct ManifestMetadata {
    pub url_template: String,
    pub pages_attempted: u32,
    pub failed_pages: Vec<u32>,
    pub version: String,
}

impl Manifest {
    pub fn new(url_template: &str, dataset: &RankingDataset) -> Self {
        Self {
            total_records: dataset.len(),
            last_updated: Local::now().to_rfc3339(),
            records: dataset.records.clone(),
            metadata: ManifestMetadata {
                url_template: url_template.to_string(),
                pages_attempted: dataset.pages_attempted,
                failed_pages: dataset.failed_pages.clone(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}
