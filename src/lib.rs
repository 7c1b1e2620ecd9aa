//! Deck Convert - question bank CSV to flashcard deck JSON
//!
//! Reads unit CSV files (one question per row), normalizes them into cards,
//! splits each unit into free and premium cards and writes a
//! `deck → units → cards` JSON document for the flashcard app.

pub mod assembler;
pub mod config;
pub mod csv_source;
pub mod error;
pub mod models;
pub mod normalize;
pub mod output;
pub mod unit_builder;

use std::path::Path;

pub use assembler::{AssembledDeck, UnitSpec};
pub use config::ConvertConfig;
pub use error::{ConvertError, Error, Result};
pub use models::{Card, Deck, MasterIndexRow, Unit};
pub use normalize::{normalize_row, NormalizeOptions, RowNormalizer};
pub use output::ConversionSummary;

/// Explicit-units conversion: parse `raw_units`, build the deck, write it.
pub fn convert_units<S: AsRef<str>>(
    deck_id: &str,
    deck_title: &str,
    raw_units: &[S],
    config: &ConvertConfig,
) -> Result<ConversionSummary> {
    config.validate()?;
    let specs = assembler::parse_unit_specs(raw_units)?;
    let assembled = assembler::assemble_from_units(deck_id, deck_title, &specs, config)?;
    output::write_assembled(&assembled)
}

/// Master-index conversion: collect the deck's units from `master`, build, write.
pub fn convert_master(
    master: &Path,
    deck_id: &str,
    config: &ConvertConfig,
) -> Result<ConversionSummary> {
    config.validate()?;
    let assembled = assembler::assemble_from_master(master, deck_id, config)?;
    output::write_assembled(&assembled)
}
