//! Deck assembly for both input modes.
//!
//! - [`units_mode`] - units listed explicitly as `unit_id:title:path`
//! - [`master_mode`] - units discovered from a master index CSV
//!
//! Either way every unit goes through the same
//! [`build_unit`](crate::unit_builder::build_unit) pipeline.

pub mod master_mode;
pub mod units_mode;

use std::path::PathBuf;

use crate::models::Deck;

pub use master_mode::{assemble_from_index_rows, assemble_from_master};
pub use units_mode::{assemble_from_units, parse_unit_specs, split_unit_list, UnitSpec};

/// A finished deck together with where it should be written
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledDeck {
    pub deck: Deck,
    pub output_path: PathBuf,
}
