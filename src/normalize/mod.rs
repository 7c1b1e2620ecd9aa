//! Row normalization: one CSV row in, one [`Card`] or nothing out.
//!
//! Question banks are edited by hand, so rows are handled leniently. A row
//! without a question or with fewer than two choices is skipped; bad numbers
//! fall back to defaults. Nothing in here returns an error.
//!
//! # Module Structure
//!
//! - [`field_parsers`] - Pure helpers for integers, tags, choices and answer indices
//! - [`fallback`] - Ordered "first usable column" rules
//! - [`stable_id`] - Stable card id resolution

pub mod fallback;
pub mod field_parsers;
pub mod stable_id;

use log::debug;

use crate::csv_source::RawRow;
use crate::models::Card;

use fallback::FallbackChain;
use field_parsers::{answer_index, collect_choices, importance_level, parse_int, split_tags};

/// Schema switches for the normalizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Older sheets: `difficulty` is only read when the `importance`
    /// column is missing from the file altogether.
    pub legacy_schema: bool,
}

/// Converts rows into cards with a fixed set of options.
///
/// Fallback chains are built once here and reused for every row.
pub struct RowNormalizer {
    stable_id: FallbackChain<String>,
    importance: FallbackChain<i64>,
}

impl RowNormalizer {
    pub fn new(options: NormalizeOptions) -> Self {
        Self {
            stable_id: stable_id::stable_id_chain(),
            importance: importance_chain(options),
        }
    }

    /// Builds a card from `row`, or `None` when the row has to be skipped.
    ///
    /// The returned card is always free; tiers are assigned per unit.
    pub fn normalize(&self, row: &RawRow) -> Option<Card> {
        let question = row.get("question");
        if question.is_empty() {
            debug!("Line {}: no question, skipping", row.line());
            return None;
        }

        let choices = collect_choices(row);
        if choices.len() < 2 {
            debug!(
                "Line {}: only {} non-empty choice(s), skipping",
                row.line(),
                choices.len()
            );
            return None;
        }

        let answer_index = answer_index(row.get("answer_index"), choices.len());
        let importance = importance_level(self.importance.resolve(row));

        Some(Card {
            stable_id: self.stable_id.resolve(row),
            question: question.to_string(),
            choices,
            answer_index,
            explanation: row.get("explanation").to_string(),
            tags: split_tags(row.get("tags")),
            importance,
            is_premium: false,
        })
    }
}

fn importance_chain(options: NormalizeOptions) -> FallbackChain<i64> {
    if options.legacy_schema {
        FallbackChain::new()
            .then("importance", |row: &RawRow| {
                row.field("importance")
                    .map(|v| parse_int(v).unwrap_or(i64::from(field_parsers::DEFAULT_IMPORTANCE)))
            })
            .then("difficulty", |row: &RawRow| parse_int(row.get("difficulty")))
    } else {
        FallbackChain::new()
            .then("importance", |row: &RawRow| parse_int(row.get("importance")))
            .then("difficulty", |row: &RawRow| parse_int(row.get("difficulty")))
    }
}

/// One-off normalization of a single row.
pub fn normalize_row(row: &RawRow, options: NormalizeOptions) -> Option<Card> {
    RowNormalizer::new(options).normalize(row)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
