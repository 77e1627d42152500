//! Scrape orchestration: query URL, fetch, decode, aggregate.
//!
//! # Architecture
//!
//! ```text
//! Scraper → PageQuery::url → Fetcher → body bytes → parser → Scraped<T>
//! ```
//!
//! Profile, guild and who-is-online lookups are one page. Power gamers and
//! insomniacs are paginated leaderboards: one page by default, or up to
//! `max_pages` when the caller asks for the whole list. Pages are walked in
//! turn with `page_delay` between them, or with `page_concurrency > 1` a
//! few at a time with request starts still spaced by `page_delay`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use miracle74::scraper::{Scraper, ScraperConfig};
//!
//! let config = ScraperConfig::default();
//! let fetcher = Arc::new(HttpFetcher::new(&config)?);
//! let scraper = Scraper::new(fetcher, config)?;
//!
//! let profile = scraper.character("Bubble").await?;
//! let gamers = scraper.power_gamers(&PowerGamersQuery::default()).await?;
//! ```

mod config;
mod pages;

pub use config::ScraperConfig;

use std::future::Future;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;
use url::Url;

use crate::app::{Result, ScrapeError};
use crate::domain::{CharacterProfile, GuildRoster, Insomniac, OnlinePlayer, PowerGamer, Scraped};
use crate::fetcher::{Fetcher, PageQuery, PowerGamersQuery};
use crate::parser;

pub struct Scraper {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    config: ScraperConfig,
    base: Url,
    cancel: CancellationToken,
}

impl Scraper {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, config: ScraperConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url)?;
        Ok(Self {
            fetcher,
            config,
            base,
            cancel: CancellationToken::new(),
        })
    }

    /// Abort in-flight and pending pages once `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub async fn character(&self, name: &str) -> Result<Scraped<CharacterProfile>> {
        let url = PageQuery::Character { name }.url(&self.base);
        let body = self.fetch_page(1, &url).await?;
        let extraction = parser::character(&body, &self.base)
            .map_err(|source| ScrapeError::Extract { page: 1, source })?;

        info!(
            "character {}: {} deaths, {} dropped",
            name,
            extraction.records.deaths.len(),
            extraction.dropped
        );
        Ok(Scraped::single(extraction.records, extraction.dropped))
    }

    pub async fn guild(&self, guild_id: u32) -> Result<Scraped<GuildRoster>> {
        let url = PageQuery::Guild { id: guild_id }.url(&self.base);
        let body = self.fetch_page(1, &url).await?;
        let extraction = parser::guild_roster(&body, guild_id)
            .map_err(|source| ScrapeError::Extract { page: 1, source })?;

        info!(
            "guild {}: {} members, {} dropped",
            guild_id,
            extraction.records.members.len(),
            extraction.dropped
        );
        Ok(Scraped::single(extraction.records, extraction.dropped))
    }

    pub async fn who_is_online(&self, order: &str) -> Result<Scraped<Vec<OnlinePlayer>>> {
        let url = PageQuery::WhoIsOnline { order }.url(&self.base);
        let body = self.fetch_page(1, &url).await?;
        let extraction = parser::who_is_online(&body)
            .map_err(|source| ScrapeError::Extract { page: 1, source })?;

        info!(
            "who is online: {} players, {} dropped",
            extraction.records.len(),
            extraction.dropped
        );
        Ok(Scraped::single(extraction.records, extraction.dropped))
    }

    pub async fn power_gamers(&self, query: &PowerGamersQuery) -> Result<Scraped<Vec<PowerGamer>>> {
        let pages = self.page_count(query.all_pages);
        let scraped = self
            .collect_pages(
                pages,
                |page| {
                    PageQuery::PowerGamers {
                        list: &query.list,
                        vocation: query.vocation.as_deref(),
                        page,
                    }
                    .url(&self.base)
                },
                parser::power_gamers,
            )
            .await?;

        info!(
            "power gamers ({}): {} records over {} pages, {} dropped",
            query.list,
            scraped.data.len(),
            scraped.pages,
            scraped.dropped_rows
        );
        Ok(scraped)
    }

    pub async fn insomniacs(&self, all_pages: bool) -> Result<Scraped<Vec<Insomniac>>> {
        let pages = self.page_count(all_pages);
        let scraped = self
            .collect_pages(
                pages,
                |page| PageQuery::Insomniacs { page }.url(&self.base),
                parser::insomniacs,
            )
            .await?;

        info!(
            "insomniacs: {} records over {} pages, {} dropped",
            scraped.data.len(),
            scraped.pages,
            scraped.dropped_rows
        );
        Ok(scraped)
    }

    fn page_count(&self, all_pages: bool) -> u32 {
        if all_pages {
            self.config.max_pages.max(1)
        } else {
            1
        }
    }

    /// Run `fut` unless the scrape is cancelled first.
    async fn guarded<F: Future>(&self, fut: F) -> Result<F::Output> {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(ScrapeError::Cancelled),
            output = fut => Ok(output),
        }
    }

    async fn fetch_page(&self, page: u32, url: &Url) -> Result<Vec<u8>> {
        self.guarded(self.fetcher.fetch(url))
            .await?
            .map_err(|source| ScrapeError::Fetch { page, source })
    }
}
