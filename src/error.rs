//! Error types for deck_convert
//!
//! Only structural problems end up here. Malformed individual rows are
//! skipped or defaulted by the normalizer and never become an error.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for a conversion run
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader could not decode a file
    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Deck serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A unit source produced no usable card
    #[error("[{unit_id}] {} contains no valid questions", .source_path.display())]
    EmptyUnit { unit_id: String, source_path: PathBuf },

    /// The deck would have no units at all
    #[error("units list is empty")]
    EmptyUnitList,

    /// No `--units` entries were given in explicit mode
    #[error("--units is empty; pass unit_id:unit_title:csv_path entries separated by commas")]
    EmptyUnitSpecList,

    /// Explicit mode needs a deck title
    #[error("--deck-title is required in --units mode")]
    MissingDeckTitle,

    /// A `unit_id:title:path` entry did not have three segments
    #[error("malformed --units entry: {0}")]
    MalformedUnitSpec(String),

    /// The master index has no row for the requested deck
    #[error("no rows for deck_id={deck_id} in master index {}", .master.display())]
    NoMatchingRows { deck_id: String, master: PathBuf },

    /// A master index row lacks unit id, unit title or source path
    #[error("incomplete master index row: {0}")]
    IncompleteMasterRow(String),

    /// Free ratio outside `[0, 1]`
    #[error("free ratio must be between 0 and 1, got {0}")]
    InvalidFreeRatio(f64),
}

/// Short alias used across the crate
pub type Error = ConvertError;

/// Result alias for deck_convert operations
pub type Result<T> = std::result::Result<T, ConvertError>;
