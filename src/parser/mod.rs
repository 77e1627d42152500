//! Extraction engine: turns fetched page bodies into typed records.
//!
//! ```text
//! body → parse_document → locate (table) → rows → fields → records
//! ```
//!
//! - [`tree`]: iterative traversal primitives
//! - [`locate`]: content-table heuristics
//! - [`rows`]: row splitting, header skipping, soft-failure accounting
//! - [`fields`]: composite-cell sub-parsers
//! - [`character`], [`listing`]: per-page decoders
//!
//! Decoding is synchronous and works on a borrowed body, so the parsed
//! document never outlives the call that created it.

pub mod character;
pub mod fields;
pub mod listing;
pub mod locate;
pub mod rows;
pub mod tree;

#[cfg(test)]
pub(crate) mod fixtures;

use scraper::Html;
use tracing::debug;
use url::Url;

use crate::app::ExtractError;
use crate::domain::{CharacterProfile, GuildRoster, Insomniac, OnlinePlayer, PowerGamer};

/// Records decoded from one page and the number of rows left behind.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction<T> {
    pub records: T,
    pub dropped: usize,
}

/// Parse a raw page body.
///
/// A body that is not UTF-8, is empty, or carries no markup at all is not a
/// page.
pub fn parse_document(body: &[u8]) -> Result<Html, ExtractError> {
    let text = std::str::from_utf8(body)
        .map_err(|e| ExtractError::InvalidDocument(format!("body is not UTF-8: {e}")))?;
    if text.trim().is_empty() {
        return Err(ExtractError::InvalidDocument("empty body".into()));
    }
    if !text.contains('<') {
        return Err(ExtractError::InvalidDocument("body contains no markup".into()));
    }
    let doc = Html::parse_document(text);
    if !doc.errors.is_empty() {
        debug!("page parsed with {} recoverable markup errors", doc.errors.len());
    }
    Ok(doc)
}

pub fn character(body: &[u8], base: &Url) -> Result<Extraction<CharacterProfile>, ExtractError> {
    let doc = parse_document(body)?;
    character::decode(doc.root_element(), base)
}

pub fn guild_roster(body: &[u8], guild_id: u32) -> Result<Extraction<GuildRoster>, ExtractError> {
    let doc = parse_document(body)?;
    listing::guild_roster(doc.root_element(), guild_id)
}

pub fn power_gamers(body: &[u8]) -> Result<Extraction<Vec<PowerGamer>>, ExtractError> {
    let doc = parse_document(body)?;
    listing::power_gamers(doc.root_element())
}

pub fn insomniacs(body: &[u8]) -> Result<Extraction<Vec<Insomniac>>, ExtractError> {
    let doc = parse_document(body)?;
    listing::insomniacs(doc.root_element())
}

pub fn who_is_online(body: &[u8]) -> Result<Extraction<Vec<OnlinePlayer>>, ExtractError> {
    let doc = parse_document(body)?;
    listing::who_is_online(doc.root_element())
}
