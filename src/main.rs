//! Deck Convert - question bank CSV to flashcard deck JSON
//!
//! Two modes share one pipeline:
//! - `--units id:title:path,...` lists the units explicitly
//! - `--master index.csv` collects the deck's units from a master index

use clap::Parser;
use deck_convert::assembler::split_unit_list;
use deck_convert::config::{DEFAULT_FREE_RATIO, DEFAULT_OUTDIR};
use deck_convert::{convert_master, convert_units, ConversionSummary, ConvertConfig, Error};
use deck_convert::{NormalizeOptions, Result};
use std::path::PathBuf;

/// Convert question bank CSV files into a deck JSON file
#[derive(Parser, Debug)]
#[command(name = "deck_convert")]
#[command(version, about, long_about = None)]
struct Args {
    /// Deck id, e.g. deck_health01
    #[arg(long, alias = "deck_id")]
    deck_id: String,

    /// Deck title (required with --units; --master reads it from the index)
    #[arg(long, alias = "deck_title")]
    deck_title: Option<String>,

    /// Comma-separated units as unit_id:unit_title:csv_path
    #[arg(long, default_value = "")]
    units: String,

    /// Master index CSV; selects master mode when given
    #[arg(long)]
    master: Option<PathBuf>,

    /// Output directory used when --out is not given
    #[arg(long, default_value = DEFAULT_OUTDIR)]
    outdir: PathBuf,

    /// Full output path (overrides --outdir and the index path)
    #[arg(long = "out")]
    out_path: Option<PathBuf>,

    /// Share of each unit's cards that stays free (0.2 = 20%)
    #[arg(long, alias = "free_ratio", default_value_t = DEFAULT_FREE_RATIO)]
    free_ratio: f64,

    /// Read importance the old way: difficulty only when there is no importance column
    #[arg(long, alias = "legacy_schema", default_value_t = false)]
    legacy_schema: bool,
}

impl Args {
    fn config(&self) -> ConvertConfig {
        ConvertConfig {
            outdir: self.outdir.clone(),
            out_path: self.out_path.clone().filter(|p| !p.as_os_str().is_empty()),
            free_ratio: self.free_ratio,
            options: NormalizeOptions {
                legacy_schema: self.legacy_schema,
            },
            ..Default::default()
        }
    }
}

fn run(args: &Args) -> Result<ConversionSummary> {
    let config = args.config();

    if let Some(master) = args.master.as_ref().filter(|m| !m.as_os_str().is_empty()) {
        log::info!("Master mode: {}", master.display());
        return convert_master(master, &args.deck_id, &config);
    }

    let deck_title = args
        .deck_title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .ok_or(Error::MissingDeckTitle)?;
    let raw_units = split_unit_list(&args.units);
    if raw_units.is_empty() {
        return Err(Error::EmptyUnitSpecList);
    }

    log::info!("Units mode: {} unit(s)", raw_units.len());
    convert_units(&args.deck_id, deck_title, &raw_units[..], &config)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match run(&args) {
        Ok(summary) => println!("{}", summary),
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    }
}
