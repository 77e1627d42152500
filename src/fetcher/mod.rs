pub mod http_fetcher;
pub mod query;

use async_trait::async_trait;
use url::Url;

use crate::app::FetchError;

pub use query::{PageQuery, PowerGamersQuery};

/// One HTTP GET returning the raw page body.
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError>;
}
