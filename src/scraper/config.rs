use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the page scraper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Site root every query is built against
    pub base_url: String,

    /// User agent sent with every request
    pub user_agent: String,

    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,

    /// Pages walked when a full listing is requested (default: 10)
    pub max_pages: u32,

    /// Minimum gap between page requests in milliseconds (default: 1000)
    pub page_delay_ms: u64,

    /// Listing pages in flight at once; 1 walks pages strictly in turn
    pub page_concurrency: usize,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: "https://miracle74.com".to_string(),
            user_agent: format!("miracle74-scraper/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
            max_pages: 10,
            page_delay_ms: 1000,
            page_concurrency: 1,
        }
    }
}

impl ScraperConfig {
    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get the pacing delay as a Duration
    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_pages == 0 {
            return Err("scraper.max_pages must be at least 1".into());
        }
        if self.page_concurrency == 0 {
            return Err("scraper.page_concurrency must be at least 1".into());
        }
        if self.timeout_secs == 0 {
            return Err("scraper.timeout_secs must be at least 1".into());
        }
        Ok(())
    }
}
