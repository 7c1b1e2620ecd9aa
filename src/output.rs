//! Deck JSON output.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::assembler::AssembledDeck;
use crate::error::{Error, Result};
use crate::models::Deck;

/// What a finished run wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub path: PathBuf,
    pub units: usize,
    pub cards: usize,
}

impl fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OK: wrote {} units={} / cards={}",
            self.path.display(),
            self.units,
            self.cards
        )
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |source| Error::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Render `deck` as indented JSON. Non-ASCII text is kept as-is.
pub fn to_json(deck: &Deck) -> Result<String> {
    Ok(serde_json::to_string_pretty(deck)?)
}

/// Writes `deck` to `path`, creating parent directories.
pub fn write_deck(deck: &Deck, path: &Path) -> Result<ConversionSummary> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }

    let json = to_json(deck)?;
    fs::write(path, json).map_err(io_error(path))?;

    let summary = ConversionSummary {
        path: path.to_path_buf(),
        units: deck.units.len(),
        cards: deck.card_count(),
    };
    info!("Wrote deck {} to {}", deck.id, path.display());
    Ok(summary)
}

/// Writes an assembled deck to its resolved location.
pub fn write_assembled(assembled: &AssembledDeck) -> Result<ConversionSummary> {
    write_deck(&assembled.deck, &assembled.output_path)
}
