//! Stable card identifiers.
//!
//! The app tracks progress per card by this id, so it has to survive
//! regenerating the deck. An explicit `stable_id` column wins; otherwise the
//! id is composed from the row's deck, unit and card ids.

use crate::csv_source::RawRow;

use super::fallback::FallbackChain;

/// Columns joined for the composite key, in order
pub const COMPOSITE_COLUMNS: [&str; 3] = ["deck_id", "unit_id", "id"];

const SEPARATOR: &str = ":";

/// Explicit id first, composite key second.
pub fn stable_id_chain() -> FallbackChain<String> {
    FallbackChain::new()
        .then("stable_id", explicit_stable_id)
        .then("composite", composite_stable_id)
}

fn explicit_stable_id(row: &RawRow) -> Option<String> {
    let explicit = row.get("stable_id");
    (!explicit.is_empty()).then(|| explicit.to_string())
}

/// `deck_id:unit_id:id` from whichever of the three are non-empty.
fn composite_stable_id(row: &RawRow) -> Option<String> {
    let parts: Vec<&str> = COMPOSITE_COLUMNS
        .iter()
        .map(|col| row.get(col))
        .filter(|p| !p.is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join(SEPARATOR))
}
