use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuildRoster {
    pub guild_id: u32,
    pub members: Vec<GuildMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildMember {
    /// Rank title as printed by the site, e.g. "Leader" or "Vice Leader".
    pub rank: String,
    pub name: String,
    pub vocation: String,
    pub level: u32,
    pub status: MemberStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberStatus {
    Online,
    Offline,
}

impl MemberStatus {
    /// Classify a status cell. Anything not mentioning "online" is offline.
    pub fn from_cell_text(text: &str) -> Self {
        if text.to_lowercase().contains("online") {
            MemberStatus::Online
        } else {
            MemberStatus::Offline
        }
    }
}

impl GuildRoster {
    pub fn online_count(&self) -> usize {
        self.members
            .iter()
            .filter(|m| m.status == MemberStatus::Online)
            .count()
    }
}
