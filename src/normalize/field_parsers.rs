//! Field parsing utilities for question rows.
//!
//! Pure functions; none of them fail. Bad input degrades to a default.

use std::num::IntErrorKind;

use log::debug;

use crate::csv_source::RawRow;

/// Choice columns in display order
pub const CHOICE_COLUMNS: [&str; 4] = ["choice1", "choice2", "choice3", "choice4"];

/// Answer position assumed when `answer_index` is missing or garbage (1-based)
pub const DEFAULT_ANSWER_POSITION: i64 = 1;

/// Importance used when nothing valid is provided
pub const DEFAULT_IMPORTANCE: u8 = 2;

/// Maps full-width digits (U+FF10..U+FF19) to ASCII; other chars pass through.
fn ascii_digit(c: char) -> char {
    match c {
        '\u{ff10}'..='\u{ff19}' => char::from(b'0' + (c as u32 - 0xff10) as u8),
        _ => c,
    }
}

/// Parses a trimmed integer, `None` for empty or non-numeric input.
///
/// Full-width digits are accepted. Values beyond `i64` saturate.
pub fn parse_int(value: &str) -> Option<i64> {
    let normalized: String = value.trim().chars().map(ascii_digit).collect();
    match normalized.parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Splits a comma-separated tag list, dropping empty pieces.
pub fn split_tags(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Non-empty `choice1..choice4` values in column order.
pub fn collect_choices(row: &RawRow) -> Vec<String> {
    CHOICE_COLUMNS
        .iter()
        .map(|col| row.get(col))
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

/// Converts a 1-based answer position into a 0-based index inside
/// `choice_count` choices, clamping anything out of range.
///
/// `choice_count` must be at least 1.
pub fn answer_index(raw: &str, choice_count: usize) -> usize {
    let position = parse_int(raw).unwrap_or(DEFAULT_ANSWER_POSITION);
    let last = choice_count.saturating_sub(1) as i64;
    let index = position.saturating_sub(1).clamp(0, last);
    if index != position.saturating_sub(1) {
        debug!("Clamped answer_index '{raw}' to {index} for {choice_count} choices");
    }
    index as usize
}

/// Keeps importance values in `{1, 2, 3}`, everything else becomes the default.
pub fn importance_level(value: Option<i64>) -> u8 {
    match value {
        Some(v @ 1..=3) => v as u8,
        _ => DEFAULT_IMPORTANCE,
    }
}

#[cfg(test)]
#[path = "field_parsers_tests.rs"]
mod tests;
