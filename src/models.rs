use serde::Serialize;

use crate::csv_source::RawRow;

/// One multiple-choice question as the app consumes it.
///
/// Only the normalizer builds these, so a `Card` always has a non-empty
/// question, 2 to 4 choices and an in-range answer index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stable_id: Option<String>,
    pub question: String,
    pub choices: Vec<String>,
    pub answer_index: usize,
    pub explanation: String,
    pub tags: Vec<String>,
    pub importance: u8,
    pub is_premium: bool,
}

/// A named group of cards inside a deck
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unit {
    pub id: String,
    pub title: String,
    pub cards: Vec<Card>,
}

impl Unit {
    /// Number of cards flagged free
    pub fn free_count(&self) -> usize {
        self.cards.iter().filter(|c| !c.is_premium).count()
    }
}

/// Top-level document written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub id: String,
    pub title: String,
    /// Purchase state belongs to the app; always false when generated
    pub is_purchased: bool,
    pub units: Vec<Unit>,
}

impl Deck {
    pub fn new(id: impl Into<String>, title: impl Into<String>, units: Vec<Unit>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            is_purchased: false,
            units,
        }
    }

    /// Total cards across all units
    pub fn card_count(&self) -> usize {
        self.units.iter().map(|u| u.cards.len()).sum()
    }
}

/// One `(deck, unit)` line of the master index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MasterIndexRow {
    pub deck_id: String,
    /// `None` when the index has no `deck_title` column at all
    pub deck_title: Option<String>,
    pub unit_no: String,
    pub unit_id: String,
    pub unit_title: String,
    pub assets_deck_path: String,
    pub assets_src_csv: String,
    pub status: String,
}

impl From<&RawRow> for MasterIndexRow {
    fn from(row: &RawRow) -> Self {
        Self {
            deck_id: row.get("deck_id").to_string(),
            deck_title: row.field("deck_title").map(str::to_string),
            unit_no: row.get("unit_no").to_string(),
            unit_id: row.get("unit_id").to_string(),
            unit_title: row.get("unit_title").to_string(),
            assets_deck_path: row.get("assets_deck_path").to_string(),
            assets_src_csv: row.get("assets_src_csv").to_string(),
            status: row.get("status").to_string(),
        }
    }
}

impl MasterIndexRow {
    /// Whether unit id, unit title and source path are all filled in
    pub fn is_complete(&self) -> bool {
        !self.unit_id.is_empty() && !self.unit_title.is_empty() && !self.assets_src_csv.is_empty()
    }
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
