use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Listing URL with a single `{}` placeholder for the page number
    #[arg(long, default_value = super::DEFAULT_URL_TEMPLATE)]
    pub url_template: String,

    /// Number of pages to fetch, starting at page 1
    #[arg(long, default_value_t = super::DEFAULT_TOTAL_PAGES)]
    pub total_pages: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = super::DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Pause after every page in seconds
    #[arg(long, default_value_t = super::DEFAULT_DELAY_SECS)]
    pub delay_secs: u64,

    /// User-Agent header sent with every request
    #[arg(long, env = "UNIVRANK_USER_AGENT", default_value = super::DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// How many records to print after the crawl
    #[arg(long, default_value_t = 10)]
    pub preview: usize,

    /// Write the collected dataset as JSON into this directory
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
