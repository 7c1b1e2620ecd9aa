//! Explicit-units mode: the caller lists every unit as `unit_id:title:path`.

use std::path::PathBuf;
use std::str::FromStr;

use log::info;

use crate::config::ConvertConfig;
use crate::error::{Error, Result};
use crate::models::Deck;
use crate::unit_builder::build_unit;

use super::AssembledDeck;

/// One `unit_id:title:source_path` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitSpec {
    pub unit_id: String,
    pub title: String,
    pub source: PathBuf,
}

impl FromStr for UnitSpec {
    type Err = Error;

    /// Splits on the first two colons only, so the path may contain more.
    fn from_str(spec: &str) -> Result<Self> {
        let mut parts = spec.splitn(3, ':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(unit_id), Some(title), Some(source)) => Ok(Self {
                unit_id: unit_id.trim().to_string(),
                title: title.trim().to_string(),
                source: PathBuf::from(source.trim()),
            }),
            _ => Err(Error::MalformedUnitSpec(spec.to_string())),
        }
    }
}

/// Splits a comma-separated `--units` value into trimmed, non-empty entries.
pub fn split_unit_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses every entry, failing on the first malformed one.
pub fn parse_unit_specs<S: AsRef<str>>(raw_specs: &[S]) -> Result<Vec<UnitSpec>> {
    raw_specs
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .map(UnitSpec::from_str)
        .collect()
}

/// Builds a deck from units given in order on the command line.
pub fn assemble_from_units(
    deck_id: &str,
    deck_title: &str,
    specs: &[UnitSpec],
    config: &ConvertConfig,
) -> Result<AssembledDeck> {
    if deck_title.trim().is_empty() {
        return Err(Error::MissingDeckTitle);
    }

    info!("Assembling deck {} from {} unit spec(s)", deck_id, specs.len());

    let units = specs
        .iter()
        .map(|spec| {
            build_unit(
                &spec.unit_id,
                &spec.title,
                &spec.source,
                config.free_ratio,
                config.options,
            )
        })
        .collect::<Result<Vec<_>>>()?;

    if units.is_empty() {
        return Err(Error::EmptyUnitList);
    }

    Ok(AssembledDeck {
        deck: Deck::new(deck_id, deck_title.trim(), units),
        output_path: config.resolve_output_path(deck_id, None),
    })
}
