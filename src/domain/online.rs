use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnlinePlayer {
    pub name: String,
    pub level: u32,
    pub vocation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}
