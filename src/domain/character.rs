use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A character profile as rendered on the characters page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterProfile {
    pub name: String,
    pub sex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_rank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    pub is_premium: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Most recent first, as listed on the page.
    pub deaths: Vec<DeathRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeathRecord {
    pub date: String,
    pub level: u32,
    pub killed_by: String,
}
