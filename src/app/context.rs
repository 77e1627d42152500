use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::app::error::Result;
use crate::config::Config;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::scraper::Scraper;

pub struct AppContext {
    pub scraper: Scraper,
    pub cancel: CancellationToken,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new(&config.scraper)?);
        Self::with_fetcher(config, fetcher)
    }

    /// Wire the scraper around an arbitrary fetcher.
    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Result<Self> {
        let cancel = CancellationToken::new();
        let scraper =
            Scraper::new(fetcher, config.scraper)?.with_cancellation(cancel.clone());

        Ok(Self { scraper, cancel })
    }
}
