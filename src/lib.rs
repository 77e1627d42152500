//! # miracle74
//!
//! A scraping engine for the Miracle 74 game site.
//!
//! ## Architecture
//!
//! ```text
//! Scraper → Fetcher → body bytes → parser (locate → rows → fields) → records
//! ```
//!
//! - [`fetcher`]: Query URLs and HTTP GET
//! - [`parser`]: Table location and row decoding
//! - [`scraper`]: Pagination, pacing and cancellation
//!
//! ## Quick Start
//!
//! ```bash
//! # A character profile with its deaths
//! miracle74 character Bubble
//!
//! # A guild roster
//! miracle74 guild 42
//!
//! # Every page of today's power gamers
//! miracle74 powergamers --all
//! ```
//!
//! ## Modules
//!
//! - [`app`]: Application context and error types
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: TOML configuration
//! - [`domain`]: Scraped record types
//! - [`fetcher`]: Page fetching
//! - [`parser`]: HTML extraction
//! - [`scraper`]: Scrape orchestration

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires the HTTP fetcher and the
/// scraper together from a loaded config.
pub mod app;

/// Configuration management.
///
/// Loads from `~/.config/miracle74/config.toml`.
pub mod config;

/// Command-line interface using clap.
///
/// - `character <name>` - Character profile and deaths
/// - `guild <id>` - Guild roster
/// - `powergamers [--all]` - Power gamers leaderboard
/// - `insomniacs [--all]` - Insomniacs leaderboard
/// - `online` - Players online now
pub mod cli;

/// Scraped record types.
///
/// - [`CharacterProfile`](domain::CharacterProfile) and [`DeathRecord`](domain::DeathRecord)
/// - [`GuildRoster`](domain::GuildRoster) of [`GuildMember`](domain::GuildMember)s
/// - [`PowerGamer`](domain::PowerGamer), [`Insomniac`](domain::Insomniac), [`OnlinePlayer`](domain::OnlinePlayer)
/// - [`Scraped`](domain::Scraped): records plus the count of rows left behind
pub mod domain;

/// Page fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for one GET
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
/// - [`PageQuery`](fetcher::PageQuery): Entity query URLs
pub mod fetcher;

/// HTML extraction over parsed pages.
pub mod parser;

/// Scrape orchestration.
///
/// - [`Scraper`](scraper::Scraper): One method per entity
/// - [`ScraperConfig`](scraper::ScraperConfig): Timeouts, paging and pacing
pub mod scraper;
