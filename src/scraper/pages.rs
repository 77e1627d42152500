//! Multi-page listing walks.

use futures::stream::{self, StreamExt, TryStreamExt};
use tokio::sync::Mutex;
use tokio::time::{sleep_until, Duration, Instant};
use tracing::debug;
use url::Url;

use crate::app::{ExtractError, Result, ScrapeError};
use crate::domain::Scraped;
use crate::parser::Extraction;
use crate::scraper::Scraper;

/// Spaces request starts at least `delay` apart.
pub(crate) struct Pacer {
    delay: Duration,
    last_start: Mutex<Option<Instant>>,
}

impl Pacer {
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_start: Mutex::new(None),
        }
    }

    /// Wait for this request's slot. The lock is held while sleeping so
    /// starts are handed out one at a time.
    pub(crate) async fn wait(&self) {
        let mut last_start = self.last_start.lock().await;
        if let Some(previous) = *last_start {
            sleep_until(previous + self.delay).await;
        }
        *last_start = Some(Instant::now());
    }
}

impl Scraper {
    /// Fetch and decode pages `1..=pages`, concatenating records in page
    /// order. The first failing page aborts the walk.
    pub(crate) async fn collect_pages<T, U, D>(
        &self,
        pages: u32,
        url_for: U,
        decode: D,
    ) -> Result<Scraped<Vec<T>>>
    where
        U: Fn(u32) -> Url,
        D: Fn(&[u8]) -> std::result::Result<Extraction<Vec<T>>, ExtractError>,
    {
        let extractions = if self.config.page_concurrency <= 1 || pages <= 1 {
            self.walk_in_turn(pages, url_for, decode).await?
        } else {
            self.walk_paced(pages, url_for, decode).await?
        };

        let mut data = Vec::new();
        let mut dropped_rows = 0;
        for extraction in extractions {
            dropped_rows += extraction.dropped;
            data.extend(extraction.records);
        }

        Ok(Scraped {
            data,
            dropped_rows,
            pages,
        })
    }

    async fn walk_in_turn<T, U, D>(
        &self,
        pages: u32,
        url_for: U,
        decode: D,
    ) -> Result<Vec<Extraction<Vec<T>>>>
    where
        U: Fn(u32) -> Url,
        D: Fn(&[u8]) -> std::result::Result<Extraction<Vec<T>>, ExtractError>,
    {
        let mut extractions = Vec::with_capacity(pages as usize);
        for page in 1..=pages {
            if page > 1 {
                self.guarded(tokio::time::sleep(self.config.page_delay()))
                    .await?;
            }
            extractions.push(self.page(page, &url_for(page), &decode).await?);
        }
        Ok(extractions)
    }

    async fn walk_paced<T, U, D>(
        &self,
        pages: u32,
        url_for: U,
        decode: D,
    ) -> Result<Vec<Extraction<Vec<T>>>>
    where
        U: Fn(u32) -> Url,
        D: Fn(&[u8]) -> std::result::Result<Extraction<Vec<T>>, ExtractError>,
    {
        let pacer = Pacer::new(self.config.page_delay());
        let pacer = &pacer;
        let decode = &decode;

        stream::iter(1..=pages)
            .map(move |page| {
                let url = url_for(page);
                async move {
                    self.guarded(pacer.wait()).await?;
                    self.page(page, &url, decode).await
                }
            })
            .buffered(self.config.page_concurrency)
            .try_collect()
            .await
    }

    async fn page<T, D>(&self, page: u32, url: &Url, decode: &D) -> Result<Extraction<Vec<T>>>
    where
        D: Fn(&[u8]) -> std::result::Result<Extraction<Vec<T>>, ExtractError>,
    {
        let body = self.fetch_page(page, url).await?;
        let extraction = decode(&body).map_err(|source| ScrapeError::Extract { page, source })?;
        debug!(
            "page {}: {} records, {} dropped",
            page,
            extraction.records.len(),
            extraction.dropped
        );
        Ok(extraction)
    }
}
