pub mod commands;

use clap::{Parser, Subcommand};

use crate::fetcher::query::{DEFAULT_ONLINE_ORDER, DEFAULT_POWER_GAMERS_LIST};

#[derive(Parser)]
#[command(name = "miracle74")]
#[command(about = "Scrape character, guild and leaderboard pages from Miracle 74", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/miracle74/config.toml
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show a character profile and its recent deaths
    Character {
        /// Character name
        name: String,
    },
    /// List the members of a guild
    Guild {
        /// Numeric guild id
        id: u32,
    },
    /// Show the power gamers leaderboard
    Powergamers {
        /// Walk every leaderboard page instead of the first
        #[arg(short, long)]
        all: bool,

        /// Leaderboard period
        #[arg(short, long, default_value = DEFAULT_POWER_GAMERS_LIST)]
        list: String,

        /// Only show one vocation
        #[arg(short, long)]
        vocation: Option<String>,
    },
    /// Show the insomniacs leaderboard
    Insomniacs {
        /// Walk every leaderboard page instead of the first
        #[arg(short, long)]
        all: bool,
    },
    /// List players currently online
    Online {
        /// Sort order requested from the site
        #[arg(short, long, default_value = DEFAULT_ONLINE_ORDER)]
        order: String,
    },
}
