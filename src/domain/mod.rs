pub mod character;
pub mod guild;
pub mod online;
pub mod ranking;
pub mod scraped;

pub use character::{CharacterProfile, DeathRecord};
pub use guild::{GuildMember, GuildRoster, MemberStatus};
pub use online::OnlinePlayer;
pub use ranking::{Insomniac, PowerGamer};
pub use scraped::Scraped;
