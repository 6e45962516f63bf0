mod fetch;
mod manifest;
mod ranking;
pub(crate) mod storage;
mod template;

pub use fetch::{FetchedPage, Pacer, PageFetcher};
pub use manifest::Manifest;
pub use ranking::{RankingDataset, Record, UNKNOWN};
pub use template::UrlTemplate;
