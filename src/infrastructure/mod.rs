mod clients;
mod encoding;
mod pacer;
mod scrapers;
mod storage;

pub use clients::http::HttpFetcher;
pub use encoding::decode_page;
pub use pacer::TokioPacer;
pub use scrapers::{ranking_table::RankingTableScraper, PageExtractor, Selectors};
pub use storage::fs_store::FileSystemStore;
