use crate::config::cli::Args;
use crate::domain::UrlTemplate;
use crate::error::Result;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

pub(crate) mod cli;

pub const DEFAULT_URL_TEMPLATE: &str = "https://example.com/university-ranking?page={}";
pub const DEFAULT_TOTAL_PAGES: u32 = 20;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_DELAY_SECS: u64 = 1;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Everything the crawl loop needs to know about the target site.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    pub url_template: UrlTemplate,
    pub total_pages: u32,
    /// Upper bound on a single page fetch.
    pub timeout: Duration,
    /// Fixed pause after each page, successful or not.
    pub delay: Duration,
    pub user_agent: String,
}

impl CrawlConfig {
    pub fn from_args(args: &Args) -> Result<Self> {
        Ok(Self {
            url_template: UrlTemplate::parse(&args.url_template)?,
            total_pages: args.total_pages,
            timeout: Duration::from_secs(args.timeout_secs),
            delay: Duration::from_secs(args.delay_secs),
            user_agent: args.user_agent.clone(),
        })
    }

    pub fn http_client(&self) -> Result<Client> {
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .build()?;
        Ok(client)
    }
}

pub struct Config {
    pub args: Args,
    pub crawl: CrawlConfig,
    pub http_client: Client,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let crawl = CrawlConfig::from_args(&args)?;
        let http_client = crawl.http_client()?;

        info!(
            "Configured crawl of {} pages from {}",
            crawl.total_pages, crawl.url_template
        );

        Ok(Self {
            args,
            crawl,
            http_client,
        })
    }
}
