use serde::{Deserialize, Serialize};

/// Records produced by one scrape together with what was left behind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scraped<T> {
    pub data: T,
    /// Rows skipped because a field could not be decoded.
    pub dropped_rows: usize,
    /// Pages fetched and decoded.
    pub pages: u32,
}

impl<T> Scraped<T> {
    pub fn single(data: T, dropped_rows: usize) -> Self {
        Self {
            data,
            dropped_rows,
            pages: 1,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.dropped_rows == 0
    }
}
