//! Uniform listing pages: power gamers, insomniacs, guild roster, who is online.

use scraper::ElementRef;

use crate::app::ExtractError;
use crate::domain::{GuildMember, GuildRoster, Insomniac, MemberStatus, OnlinePlayer, PowerGamer};
use crate::parser::fields::{flag_country, linked_name};
use crate::parser::locate::listing_table;
use crate::parser::rows::{cell_text, decode_listing, number, ListingLayout, RowError};
use crate::parser::Extraction;

const RANKED_HEADER: &[&str] = &["Rank", "Name"];

pub const POWER_GAMERS: ListingLayout = ListingLayout {
    name: "power gamers",
    min_cells: 5,
    header_tokens: RANKED_HEADER,
};

pub const INSOMNIACS: ListingLayout = ListingLayout {
    name: "insomniacs",
    min_cells: 5,
    header_tokens: RANKED_HEADER,
};

pub const GUILD_MEMBERS: ListingLayout = ListingLayout {
    name: "guild members",
    min_cells: 5,
    header_tokens: RANKED_HEADER,
};

pub const WHO_IS_ONLINE: ListingLayout = ListingLayout {
    name: "who is online",
    min_cells: 3,
    header_tokens: &["Name", "Level"],
};

fn table_for<'a>(
    root: ElementRef<'a>,
    layout: &ListingLayout,
) -> Result<ElementRef<'a>, ExtractError> {
    listing_table(root).ok_or(ExtractError::SectionMissing(layout.name))
}

fn plain_name(cell: ElementRef<'_>) -> Result<String, RowError> {
    let name = cell_text(cell);
    if name.is_empty() {
        Err(RowError::Missing("name"))
    } else {
        Ok(name)
    }
}

fn link_name(cell: ElementRef<'_>) -> Result<String, RowError> {
    linked_name(cell).ok_or(RowError::Missing("name"))
}

/// `[rank, name, vocation, level, points today]`, name as plain text.
pub fn power_gamers(root: ElementRef<'_>) -> Result<Extraction<Vec<PowerGamer>>, ExtractError> {
    let table = table_for(root, &POWER_GAMERS)?;
    Ok(decode_listing(table, &POWER_GAMERS, |cells| {
        Ok(PowerGamer {
            rank: number(cells[0], "rank")?,
            name: plain_name(cells[1])?,
            vocation: cell_text(cells[2]),
            level: number(cells[3], "level")?,
            today: number(cells[4], "today")?,
        })
    }))
}

/// `[rank, flag + linked name, vocation, level, time online]`.
pub fn insomniacs(root: ElementRef<'_>) -> Result<Extraction<Vec<Insomniac>>, ExtractError> {
    let table = table_for(root, &INSOMNIACS)?;
    Ok(decode_listing(table, &INSOMNIACS, |cells| {
        Ok(Insomniac {
            rank: number(cells[0], "rank")?,
            name: link_name(cells[1])?,
            country: flag_country(cells[1]),
            vocation: cell_text(cells[2]),
            level: number(cells[3], "level")?,
            time_online: cell_text(cells[4]),
        })
    }))
}

/// `[rank title, linked name, vocation, level, status]`.
///
/// A blank rank cell inherits the title of the row above it instead of
/// dropping the member.
pub fn guild_roster(
    root: ElementRef<'_>,
    guild_id: u32,
) -> Result<Extraction<GuildRoster>, ExtractError> {
    let table = table_for(root, &GUILD_MEMBERS)?;
    let mut current_rank = String::new();

    let members = decode_listing(table, &GUILD_MEMBERS, |cells| {
        let rank = cell_text(cells[0]);
        if !rank.is_empty() {
            current_rank = rank;
        }
        Ok(GuildMember {
            rank: current_rank.clone(),
            name: link_name(cells[1])?,
            vocation: cell_text(cells[2]),
            level: number(cells[3], "level")?,
            status: MemberStatus::from_cell_text(&cell_text(cells[4])),
        })
    });

    Ok(Extraction {
        records: GuildRoster {
            guild_id,
            members: members.records,
        },
        dropped: members.dropped,
    })
}

/// `[flag + linked name, level, vocation]`.
pub fn who_is_online(root: ElementRef<'_>) -> Result<Extraction<Vec<OnlinePlayer>>, ExtractError> {
    let table = table_for(root, &WHO_IS_ONLINE)?;
    Ok(decode_listing(table, &WHO_IS_ONLINE, |cells| {
        Ok(OnlinePlayer {
            name: link_name(cells[0])?,
            country: flag_country(cells[0]),
            level: number(cells[1], "level")?,
            vocation: cell_text(cells[2]),
        })
    }))
}
