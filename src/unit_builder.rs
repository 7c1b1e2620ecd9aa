//! Unit building: normalize a unit's rows and split them into free and
//! premium tiers.

use std::path::Path;

use log::{debug, info, warn};

use crate::csv_source::{read_rows, RawRow};
use crate::error::{Error, Result};
use crate::models::{Card, Unit};
use crate::normalize::{NormalizeOptions, RowNormalizer};

/// Number of leading cards that stay free.
///
/// Any positive ratio guarantees at least one free card; the count never
/// exceeds `card_count`. Rounds half to even.
pub fn free_count(card_count: usize, free_ratio: f64) -> usize {
    if free_ratio <= 0.0 || card_count == 0 {
        return 0;
    }
    let rounded = (card_count as f64 * free_ratio).round_ties_even() as usize;
    rounded.max(1).min(card_count)
}

/// Marks the first `free_count` cards free and the rest premium.
pub fn assign_tiers(cards: &mut [Card], free_ratio: f64) {
    let free = free_count(cards.len(), free_ratio);
    for (i, card) in cards.iter_mut().enumerate() {
        card.is_premium = i >= free;
    }
}

/// Builds a unit from rows already in memory.
///
/// `source` only names the origin of the rows in errors and logs.
pub fn build_unit_from_rows(
    unit_id: &str,
    unit_title: &str,
    source: &Path,
    rows: &[RawRow],
    free_ratio: f64,
    options: NormalizeOptions,
) -> Result<Unit> {
    let normalizer = RowNormalizer::new(options);
    let mut cards: Vec<Card> = rows.iter().filter_map(|r| normalizer.normalize(r)).collect();

    let skipped = rows.len() - cards.len();
    if skipped > 0 {
        warn!(
            "[{}] skipped {} of {} rows in {}",
            unit_id,
            skipped,
            rows.len(),
            source.display()
        );
    }

    if cards.is_empty() {
        return Err(Error::EmptyUnit {
            unit_id: unit_id.to_string(),
            source_path: source.to_path_buf(),
        });
    }

    assign_tiers(&mut cards, free_ratio);

    let unit = Unit {
        id: unit_id.to_string(),
        title: unit_title.to_string(),
        cards,
    };
    info!(
        "Built unit {} ({} cards, {} free)",
        unit.id,
        unit.cards.len(),
        unit.free_count()
    );
    Ok(unit)
}

/// Reads `source` and builds the unit from its rows.
pub fn build_unit(
    unit_id: &str,
    unit_title: &str,
    source: &Path,
    free_ratio: f64,
    options: NormalizeOptions,
) -> Result<Unit> {
    debug!("Building unit {} from {}", unit_id, source.display());
    let rows = read_rows(source)?;
    build_unit_from_rows(unit_id, unit_title, source, &rows, free_ratio, options)
}

#[cfg(test)]
#[path = "unit_builder_tests.rs"]
mod tests;
