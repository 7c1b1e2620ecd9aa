//! Master-index mode: a deck's units come from a shared index CSV.
//!
//! Index columns: `deck_id, deck_title, unit_no, unit_id, unit_title,
//! assets_deck_path, assets_src_csv, status`.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::ConvertConfig;
use crate::csv_source::{read_rows, RawRow};
use crate::error::{Error, Result};
use crate::models::{Deck, MasterIndexRow};
use crate::normalize::field_parsers::parse_int;
use crate::unit_builder::build_unit;

use super::AssembledDeck;

/// Sort position for rows whose `unit_no` is missing or not a number
pub const UNIT_NO_SENTINEL: i64 = i64::MAX;

/// `(unit_no, unit_id)` ordering key; bad numbers sort last.
pub fn sort_key(row: &MasterIndexRow) -> (i64, &str) {
    let unit_no = parse_int(&row.unit_no).unwrap_or(UNIT_NO_SENTINEL);
    (unit_no, row.unit_id.as_str())
}

/// Rows belonging to `deck_id`, in unit order.
pub fn select_deck_rows(rows: &[RawRow], deck_id: &str) -> Vec<MasterIndexRow> {
    let mut targets: Vec<MasterIndexRow> = rows
        .iter()
        .map(MasterIndexRow::from)
        .filter(|r| r.deck_id == deck_id)
        .collect();
    targets.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
    targets
}

fn describe(row: &MasterIndexRow) -> String {
    format!(
        "deck_id={}, unit_no={}, unit_id={}, unit_title={}, assets_src_csv={}",
        row.deck_id, row.unit_no, row.unit_id, row.unit_title, row.assets_src_csv
    )
}

/// Builds a deck from master index rows already in memory.
///
/// `master` only names the index in errors.
pub fn assemble_from_index_rows(
    master: &Path,
    rows: &[RawRow],
    deck_id: &str,
    config: &ConvertConfig,
) -> Result<AssembledDeck> {
    let targets = select_deck_rows(rows, deck_id);
    let Some(first) = targets.first() else {
        return Err(Error::NoMatchingRows {
            deck_id: deck_id.to_string(),
            master: master.to_path_buf(),
        });
    };

    let deck_title = first
        .deck_title
        .clone()
        .unwrap_or_else(|| deck_id.to_string());
    info!(
        "Assembling deck {} ({}) from {} master index row(s)",
        deck_id,
        deck_title,
        targets.len()
    );

    let mut units = Vec::with_capacity(targets.len());
    let mut deck_path: Option<PathBuf> = None;

    for row in &targets {
        if !row.is_complete() {
            return Err(Error::IncompleteMasterRow(describe(row)));
        }
        debug!("Unit {} (no={}, status={:?})", row.unit_id, row.unit_no, row.status);

        units.push(build_unit(
            &row.unit_id,
            &row.unit_title,
            Path::new(&row.assets_src_csv),
            config.free_ratio,
            config.options,
        )?);

        if deck_path.is_none() && !row.assets_deck_path.is_empty() {
            deck_path = Some(PathBuf::from(&row.assets_deck_path));
        }
    }

    Ok(AssembledDeck {
        deck: Deck::new(deck_id, deck_title, units),
        output_path: config.resolve_output_path(deck_id, deck_path.as_deref()),
    })
}

/// Reads the master index at `master` and builds the deck `deck_id`.
pub fn assemble_from_master(
    master: &Path,
    deck_id: &str,
    config: &ConvertConfig,
) -> Result<AssembledDeck> {
    let rows = read_rows(master)?;
    assemble_from_index_rows(master, &rows, deck_id, config)
}

#[cfg(test)]
#[path = "master_mode_tests.rs"]
mod tests;
