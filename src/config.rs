//! Conversion settings shared by both assembly modes.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::normalize::NormalizeOptions;

/// Default output directory when no explicit path is given
pub const DEFAULT_OUTDIR: &str = "assets/decks";

/// Share of each unit's cards that stays free
pub const DEFAULT_FREE_RATIO: f64 = 0.2;

/// Output file extension
pub const DEFAULT_EXTENSION: &str = "json";

/// Settings for one conversion run
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertConfig {
    /// Directory used for `<deck_id>.<extension>` when nothing else decides
    pub outdir: PathBuf,
    /// Explicit output file; wins over every other location
    pub out_path: Option<PathBuf>,
    /// Fraction of cards per unit marked free, in `[0, 1]`
    pub free_ratio: f64,
    pub options: NormalizeOptions,
    pub extension: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            outdir: PathBuf::from(DEFAULT_OUTDIR),
            out_path: None,
            free_ratio: DEFAULT_FREE_RATIO,
            options: NormalizeOptions::default(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl ConvertConfig {
    /// Checks values the CLI cannot constrain on its own.
    pub fn validate(&self) -> Result<()> {
        if !self.free_ratio.is_finite() || !(0.0..=1.0).contains(&self.free_ratio) {
            return Err(Error::InvalidFreeRatio(self.free_ratio));
        }
        Ok(())
    }

    /// Picks the output file for `deck_id`.
    ///
    /// Order: explicit `out_path`, then `candidate` (from the master index),
    /// then `<outdir>/<deck_id>.<extension>`.
    pub fn resolve_output_path(&self, deck_id: &str, candidate: Option<&Path>) -> PathBuf {
        if let Some(path) = &self.out_path {
            return path.clone();
        }
        if let Some(path) = candidate {
            return path.to_path_buf();
        }
        self.outdir.join(format!("{}.{}", deck_id, self.extension))
    }
}
