use scraper::ElementRef;
use tracing::{debug, warn};
use url::Url;

use crate::app::ExtractError;
use crate::domain::{CharacterProfile, DeathRecord};
use crate::parser::fields::{
    death_level, first_line, flag_country, guild_membership, killed_by, last_login,
};
use crate::parser::locate::{content_table, deaths_table};
use crate::parser::rows::{cell_text, collapse_ws, parse_int, rows};
use crate::parser::Extraction;

/// The value cell of a profile row.
pub struct ProfileValue<'a> {
    pub cell: ElementRef<'a>,
    /// Trimmed text of `cell`.
    pub text: String,
    pub base: &'a Url,
}

type Setter = fn(&mut CharacterProfile, &ProfileValue<'_>);

/// Maps a label cell to the profile field it fills.
pub struct LabelRule {
    /// Every token must appear in the label text.
    pub tokens: &'static [&'static str],
    pub apply: Setter,
}

impl LabelRule {
    pub fn matches(&self, label: &str) -> bool {
        self.tokens.iter().all(|token| label.contains(token))
    }
}

pub const PROFILE_RULES: &[LabelRule] = &[
    LabelRule {
        tokens: &["Name:"],
        apply: set_name,
    },
    LabelRule {
        tokens: &["Sex:"],
        apply: |p, v| p.sex = v.text.clone(),
    },
    LabelRule {
        tokens: &["Vocation:"],
        apply: |p, v| p.vocation = non_empty(&v.text),
    },
    LabelRule {
        tokens: &["Level:"],
        apply: |p, v| p.level = parse_int(&v.text),
    },
    LabelRule {
        tokens: &["Residence:"],
        apply: |p, v| p.residence = non_empty(&v.text),
    },
    LabelRule {
        tokens: &["Guild Membership:"],
        apply: set_guild,
    },
    LabelRule {
        tokens: &["Last login:"],
        apply: set_last_login,
    },
    LabelRule {
        tokens: &["Account", "Status:"],
        apply: |p, v| p.is_premium = v.text.contains("Premium"),
    },
];

/// First rule whose tokens all appear in `label`.
pub fn rule_for(label: &str) -> Option<&'static LabelRule> {
    PROFILE_RULES.iter().find(|rule| rule.matches(label))
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

fn set_name(profile: &mut CharacterProfile, value: &ProfileValue<'_>) {
    profile.name = first_line(&value.text);
    profile.country = flag_country(value.cell);
}

fn set_guild(profile: &mut CharacterProfile, value: &ProfileValue<'_>) {
    let membership = guild_membership(value.cell, value.base);
    profile.guild_rank = membership.rank;
    profile.guild_name = membership.guild_name;
    profile.guild_url = membership.guild_url;
}

fn set_last_login(profile: &mut CharacterProfile, value: &ProfileValue<'_>) {
    profile.last_login = last_login(&value.text);
    if profile.last_login.is_none() {
        debug!("unrecognised last login value {:?}", value.text);
    }
}

/// Decode a character page: the information table plus the optional death log.
pub fn decode(
    root: ElementRef<'_>,
    base: &Url,
) -> Result<Extraction<CharacterProfile>, ExtractError> {
    let table = content_table(root)
        .ok_or(ExtractError::SectionMissing("character information table"))?;

    let mut profile = CharacterProfile::default();
    for row in rows(table) {
        let [label, value, ..] = row.cells[..] else {
            continue;
        };
        let label = collapse_ws(&cell_text(label));
        if let Some(rule) = rule_for(&label) {
            let value = ProfileValue {
                cell: value,
                text: cell_text(value),
                base,
            };
            (rule.apply)(&mut profile, &value);
        }
    }

    if profile.name.is_empty() {
        return Err(ExtractError::SectionMissing("character name"));
    }

    let mut dropped = 0;
    if let Some(table) = deaths_table(root) {
        let deaths = decode_deaths(table);
        profile.deaths = deaths.records;
        dropped = deaths.dropped;
    }

    Ok(Extraction {
        records: profile,
        dropped,
    })
}

/// Two-cell death log rows: date, then a free-text description.
pub fn decode_deaths(table: ElementRef<'_>) -> Extraction<Vec<DeathRecord>> {
    let mut records = Vec::new();
    let mut dropped = 0;

    for row in rows(table) {
        let [date, description, ..] = row.cells[..] else {
            continue;
        };
        let date = collapse_ws(&cell_text(date));
        let description = collapse_ws(&cell_text(description));

        let Some(killed_by) = killed_by(&description) else {
            continue;
        };
        if date.is_empty() {
            continue;
        }

        match death_level(&description) {
            Some(level) => records.push(DeathRecord {
                date,
                level,
                killed_by,
            }),
            None => {
                warn!("dropping death on {}: no level in {:?}", date, description);
                dropped += 1;
            }
        }
    }

    Extraction { records, dropped }
}
