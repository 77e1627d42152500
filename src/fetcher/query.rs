//! Entity query URLs. Every page on the site is the base URL plus a
//! `subtopic` query string.

use url::Url;

pub const DEFAULT_POWER_GAMERS_LIST: &str = "today";
pub const DEFAULT_ONLINE_ORDER: &str = "name";

/// Power gamers leaderboard selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerGamersQuery {
    pub list: String,
    pub vocation: Option<String>,
    pub all_pages: bool,
}

impl Default for PowerGamersQuery {
    fn default() -> Self {
        Self {
            list: DEFAULT_POWER_GAMERS_LIST.to_string(),
            vocation: None,
            all_pages: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageQuery<'a> {
    Character { name: &'a str },
    Guild { id: u32 },
    PowerGamers {
        list: &'a str,
        vocation: Option<&'a str>,
        page: u32,
    },
    Insomniacs { page: u32 },
    WhoIsOnline { order: &'a str },
}

impl PageQuery<'_> {
    pub fn url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            match self {
                PageQuery::Character { name } => {
                    pairs
                        .append_pair("subtopic", "characters")
                        .append_pair("name", name);
                }
                PageQuery::Guild { id } => {
                    pairs
                        .append_pair("subtopic", "guilds")
                        .append_pair("action", "show")
                        .append_pair("guild", &id.to_string());
                }
                PageQuery::PowerGamers {
                    list,
                    vocation,
                    page,
                } => {
                    pairs
                        .append_pair("subtopic", "powergamers")
                        .append_pair("list", list)
                        .append_pair("page", &page.to_string());
                    if let Some(vocation) = vocation {
                        pairs.append_pair("vocation", vocation);
                    }
                }
                PageQuery::Insomniacs { page } => {
                    pairs
                        .append_pair("subtopic", "insomniacs")
                        .append_pair("page", &page.to_string());
                }
                PageQuery::WhoIsOnline { order } => {
                    pairs
                        .append_pair("subtopic", "whoisonline")
                        .append_pair("order", order);
                }
            }
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://miracle74.com").unwrap()
    }

    #[test]
    fn test_character_url_encodes_name() {
        let url = PageQuery::Character { name: "Night Owl" }.url(&base());
        assert_eq!(
            url.as_str(),
            "https://miracle74.com/?subtopic=characters&name=Night+Owl"
        );
    }

    #[test]
    fn test_guild_url() {
        let url = PageQuery::Guild { id: 42 }.url(&base());
        assert_eq!(
            url.as_str(),
            "https://miracle74.com/?subtopic=guilds&action=show&guild=42"
        );
    }

    #[test]
    fn test_power_gamers_url_with_and_without_vocation() {
        let plain = PageQuery::PowerGamers {
            list: DEFAULT_POWER_GAMERS_LIST,
            vocation: None,
            page: 3,
        }
        .url(&base());
        assert_eq!(
            plain.as_str(),
            "https://miracle74.com/?subtopic=powergamers&list=today&page=3"
        );

        let filtered = PageQuery::PowerGamers {
            list: "week",
            vocation: Some("knight"),
            page: 1,
        }
        .url(&base());
        assert_eq!(
            filtered.as_str(),
            "https://miracle74.com/?subtopic=powergamers&list=week&page=1&vocation=knight"
        );
    }

    #[test]
    fn test_insomniacs_and_online_urls() {
        assert_eq!(
            PageQuery::Insomniacs { page: 2 }.url(&base()).as_str(),
            "https://miracle74.com/?subtopic=insomniacs&page=2"
        );
        assert_eq!(
            PageQuery::WhoIsOnline { order: "level" }.url(&base()).as_str(),
            "https://miracle74.com/?subtopic=whoisonline&order=level"
        );
    }

    #[test]
    fn test_base_query_is_replaced() {
        let base = Url::parse("https://miracle74.com/index.php?stale=1").unwrap();
        let url = PageQuery::Guild { id: 1 }.url(&base);
        assert_eq!(
            url.as_str(),
            "https://miracle74.com/index.php?subtopic=guilds&action=show&guild=1"
        );
    }
}
