use std::str::FromStr;

use scraper::ElementRef;
use thiserror::Error;
use tracing::{debug, warn};

use crate::parser::tree::{find_all, is_tag, text_content};
use crate::parser::Extraction;

/// A table row and its direct `td` cells.
pub struct Row<'a> {
    pub element: ElementRef<'a>,
    pub cells: Vec<ElementRef<'a>>,
}

/// Every row under `table`, in document order.
///
/// Cells are the row's own `td` children, so a wrapper row around a nested
/// table does not absorb the nested table's cells.
pub fn rows<'a>(table: ElementRef<'a>) -> Vec<Row<'a>> {
    find_all(table, "tr")
        .into_iter()
        .map(|element| Row {
            element,
            cells: element
                .children()
                .filter_map(ElementRef::wrap)
                .filter(|child| is_tag(child, "td"))
                .collect(),
        })
        .collect()
}

/// Trimmed text of a cell.
pub fn cell_text(cell: ElementRef<'_>) -> String {
    text_content(cell).trim().to_string()
}

/// Collapse whitespace runs (including non-breaking spaces) to single spaces.
pub fn collapse_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse an integer cell, tolerating `,` thousands separators.
pub fn parse_int<T: FromStr>(text: &str) -> Option<T> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// Why a data row was not turned into a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("only {found} cells, expected at least {expected}")]
    TooFewCells { found: usize, expected: usize },

    #[error("missing {0}")]
    Missing(&'static str),

    #[error("failed to parse {field} {value:?}")]
    Number { field: &'static str, value: String },
}

/// Parse a required numeric cell.
pub fn number<T: FromStr>(cell: ElementRef<'_>, field: &'static str) -> Result<T, RowError> {
    let value = cell_text(cell);
    if value.is_empty() {
        return Err(RowError::Missing(field));
    }
    parse_int(&value).ok_or(RowError::Number { field, value })
}

/// Shape of a listing table.
#[derive(Debug, Clone, Copy)]
pub struct ListingLayout {
    pub name: &'static str,
    pub min_cells: usize,
    /// A leading row containing all of these is a header.
    pub header_tokens: &'static [&'static str],
}

impl ListingLayout {
    pub fn is_header(&self, row: &Row<'_>) -> bool {
        let text = text_content(row.element);
        self.header_tokens.iter().all(|token| text.contains(token))
    }
}

/// Decode every data row of a listing table with `decode_row`.
///
/// Header rows and short caption rows are only recognised before the first
/// record, so a player whose name happens to contain the header tokens is
/// still decoded.
pub fn decode_listing<'a, T, F>(
    table: ElementRef<'a>,
    layout: &ListingLayout,
    mut decode_row: F,
) -> Extraction<Vec<T>>
where
    F: FnMut(&[ElementRef<'a>]) -> Result<T, RowError>,
{
    let mut records = Vec::new();
    let mut dropped = 0;

    for (index, row) in rows(table).into_iter().enumerate() {
        if row.cells.is_empty() {
            continue;
        }

        if records.is_empty() && layout.is_header(&row) {
            debug!("{}: skipping header row {}", layout.name, index);
            continue;
        }

        // short rows ahead of the data are captions
        if records.is_empty() && dropped == 0 && row.cells.len() < layout.min_cells {
            debug!("{}: skipping caption row {}", layout.name, index);
            continue;
        }

        let result = if row.cells.len() < layout.min_cells {
            Err(RowError::TooFewCells {
                found: row.cells.len(),
                expected: layout.min_cells,
            })
        } else {
            decode_row(&row.cells)
        };

        match result {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!("{}: dropping row {}: {}", layout.name, index, e);
                dropped += 1;
            }
        }
    }

    Extraction { records, dropped }
}
