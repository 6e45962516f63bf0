use crate::config::cli::Args;
use crate::config::Config;
use crate::domain::storage::Storage;
use crate::error::Result;
use crate::infrastructure::{
    FileSystemStore, HttpFetcher, RankingTableScraper, Selectors, TokioPacer,
};
use crate::services::ranking_service::RankingService;
use crate::services::report::summary_lines;
use crate::services::scraping::ScrapingService;
use clap::Parser;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, Level};

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let level = Level::from_str(&args.log_level).unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = Config::from_args(args)?;

    let scraping = ScrapingService::new(
        Arc::new(HttpFetcher::new(config.http_client.clone())),
        Box::new(RankingTableScraper::new(Selectors::ranking_table()?)),
        Arc::new(TokioPacer),
        config.crawl.delay,
    );
    let store = config
        .args
        .output_dir
        .as_ref()
        .map(|dir| Arc::new(FileSystemStore::new(dir.clone())) as Arc<dyn Storage>);

    let service = RankingService::new(config.crawl.clone(), scraping, store);
    let dataset = service.process().await?;

    for line in summary_lines(&dataset, config.args.preview) {
        println!("{line}");
    }

    info!("Ranking crawl finished");
    Ok(())
}
