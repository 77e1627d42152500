//! Sub-parsers for composite cells.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;
use scraper::ElementRef;
use url::Url;

use crate::parser::rows::collapse_ws;
use crate::parser::tree::{attr, find_first, first_descendant, is_tag, text_before, text_content};

/// Path fragment identifying country flag images.
pub const FLAGS_DIR: &str = "/images/flags/";

const GUILD_RANK_DELIMITER: &str = " of the ";

/// Last-login layouts, tried in order.
const LAST_LOGIN_LAYOUTS: [&str; 2] = ["%d %B %Y, %I:%M %p", "%d %B %Y, %I:%M:%S %p"];

static DEATH_LEVEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)level (\d+)").expect("death level pattern is valid"));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuildMembership {
    pub rank: Option<String>,
    pub guild_name: Option<String>,
    pub guild_url: Option<String>,
}

/// Split a "Rank of the <a>Guild</a>" cell.
pub fn guild_membership(cell: ElementRef<'_>, base: &Url) -> GuildMembership {
    let (before, anchor) = text_before(cell, "a");

    // pad so a delimiter sitting right before the anchor still matches
    let phrase = format!("{} ", collapse_ws(&before));
    let rank = match phrase.split_once(GUILD_RANK_DELIMITER) {
        Some((rank, _)) => rank.trim().to_string(),
        None => phrase.trim().to_string(),
    };

    let guild_name = anchor
        .map(|a| text_content(a).trim().to_string())
        .filter(|name| !name.is_empty());
    let guild_url = anchor
        .and_then(|a| attr(&a, "href"))
        .map(|href| absolute_href(href, base));

    GuildMembership {
        rank: (!rank.is_empty()).then_some(rank),
        guild_name,
        guild_url,
    }
}

/// Resolve a query-only href (`?subtopic=...`) against the site base.
pub fn absolute_href(href: &str, base: &Url) -> String {
    if href.starts_with('?') {
        base.join(href)
            .map(String::from)
            .unwrap_or_else(|_| href.to_string())
    } else {
        href.to_string()
    }
}

/// Parse a last-login value such as "14 October 2026, 3:04 pm".
pub fn last_login(value: &str) -> Option<DateTime<Utc>> {
    let value = collapse_ws(value);
    LAST_LOGIN_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(&value, layout).ok())
        .map(|naive| naive.and_utc())
}

/// Level mentioned in a death description.
pub fn death_level(description: &str) -> Option<u32> {
    DEATH_LEVEL
        .captures(description)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Killer named after the first " by " of a death description.
pub fn killed_by(description: &str) -> Option<String> {
    description
        .split_once(" by ")
        .map(|(_, killer)| killer.trim().to_string())
        .filter(|killer| !killer.is_empty())
}

/// Country code from the first flag image in a cell, e.g. `pl` for
/// `/images/flags/pl.gif`.
pub fn flag_country(cell: ElementRef<'_>) -> Option<String> {
    let img = find_first(cell, |e| {
        is_tag(e, "img") && attr(e, "src").is_some_and(|src| src.contains(FLAGS_DIR))
    })?;
    let src = attr(&img, "src")?;
    let path = src.split(['?', '#']).next().unwrap_or(src);
    let filename = path.rsplit('/').next()?;
    let stem = filename
        .rsplit_once('.')
        .map_or(filename, |(stem, _)| stem);
    (!stem.is_empty()).then(|| stem.to_string())
}

/// Text of the first anchor in a cell.
pub fn linked_name(cell: ElementRef<'_>) -> Option<String> {
    first_descendant(cell, "a")
        .map(|a| text_content(a).trim().to_string())
        .filter(|name| !name.is_empty())
}

/// First line of a multi-line value.
pub fn first_line(value: &str) -> String {
    value
        .trim()
        .lines()
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}
