//! Headered CSV reading into loosely typed rows.
//!
//! Both unit sources and the master index go through here. Every row keeps
//! all of its columns as trimmed strings; interpretation happens later.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

const BOM: char = '\u{feff}';

/// One data row keyed by trimmed header name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: HashMap<String, String>,
    line: u64,
}

impl RawRow {
    /// Build a row from `(column, value)` pairs. Keys and values are trimmed.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let fields = pairs
            .into_iter()
            .map(|(k, v)| (clean_header(k.as_ref()), v.as_ref().trim().to_string()))
            .collect();
        Self { fields, line: 0 }
    }

    /// Value of `column`, or `None` when the file has no such column.
    pub fn field(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Value of `column`, empty when absent.
    pub fn get(&self, column: &str) -> &str {
        self.field(column).unwrap_or("")
    }

    /// 1-based line number in the source file (0 when built in memory)
    pub fn line(&self) -> u64 {
        self.line
    }
}

fn clean_header(raw: &str) -> String {
    raw.trim_start_matches(BOM).trim().to_string()
}

/// Read every data row of the CSV file at `path`.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    debug!("Reading CSV rows from {}", path.display());
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_rows(file).map_err(|source| Error::Csv {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse headered CSV from any reader.
///
/// Records shorter than the header are accepted; their missing trailing
/// columns are simply absent from the row.
pub fn parse_rows<R: Read>(reader: R) -> std::result::Result<Vec<RawRow>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(clean_header).collect();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let fields = headers
            .iter()
            .zip(record.iter())
            .map(|(k, v)| (k.clone(), v.trim().to_string()))
            .collect();
        rows.push(RawRow { fields, line });
    }

    debug!("Parsed {} data rows", rows.len());
    Ok(rows)
}

#[cfg(test)]
#[path = "csv_source_tests.rs"]
mod tests;
