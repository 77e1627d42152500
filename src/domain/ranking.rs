use serde::{Deserialize, Serialize};

/// One row of the power gamers list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerGamer {
    pub rank: u32,
    pub name: String,
    pub vocation: String,
    pub level: u32,
    /// Experience points gained in the listed period.
    pub today: i64,
}

/// One row of the insomniacs list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insomniac {
    pub rank: u32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub vocation: String,
    pub level: u32,
    pub time_online: String,
}
