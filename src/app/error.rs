use thiserror::Error;

/// Failure of a single HTTP fetch.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("unexpected status code {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("failed to fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Failure to turn a fetched page into records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    #[error("{0} not found")]
    SectionMissing(&'static str),
}

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("page {page}: {source}")]
    Fetch {
        page: u32,
        #[source]
        source: FetchError,
    },

    #[error("page {page}: {source}")]
    Extract {
        page: u32,
        #[source]
        source: ExtractError,
    },

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("scrape cancelled")]
    Cancelled,
}

impl ScrapeError {
    /// True when the page was fetched but the expected section was absent,
    /// which usually means an unknown character name or guild id.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ScrapeError::Extract {
                source: ExtractError::SectionMissing(_),
                ..
            }
        )
    }

    /// Page number the failure is attributed to, if any.
    pub fn page(&self) -> Option<u32> {
        match self {
            ScrapeError::Fetch { page, .. } | ScrapeError::Extract { page, .. } => Some(*page),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_missing_is_not_found() {
        let err = ScrapeError::Extract {
            page: 1,
            source: ExtractError::SectionMissing("character information table"),
        };
        assert!(err.is_not_found());
        assert_eq!(err.page(), Some(1));
        assert_eq!(
            err.to_string(),
            "page 1: character information table not found"
        );
    }

    #[test]
    fn test_fetch_error_is_not_not_found() {
        let err = ScrapeError::Fetch {
            page: 3,
            source: FetchError::Status {
                url: "https://miracle74.com/?subtopic=insomniacs&page=3".into(),
                status: 503,
            },
        };
        assert!(!err.is_not_found());
        assert_eq!(err.page(), Some(3));
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_cancelled_has_no_page() {
        assert_eq!(ScrapeError::Cancelled.page(), None);
        assert!(!ScrapeError::Cancelled.is_not_found());
    }

    #[test]
    fn test_invalid_document_message() {
        let err = ExtractError::InvalidDocument("empty body".into());
        assert_eq!(err.to_string(), "invalid document: empty body");
    }
}
