//! Ordered fallback rules over a row.
//!
//! Several card fields come from "first column that has something usable"
//! logic. A [`FallbackChain`] holds those candidates in priority order and
//! returns the first one that yields a value.

use log::trace;

use crate::csv_source::RawRow;

type Extractor<T> = Box<dyn Fn(&RawRow) -> Option<T>>;

struct Rule<T> {
    name: &'static str,
    extract: Extractor<T>,
}

/// Candidate extractors tried in sequence until one returns `Some`.
pub struct FallbackChain<T> {
    rules: Vec<Rule<T>>,
}

impl<T> Default for FallbackChain<T> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<T> FallbackChain<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule with the lowest priority so far.
    pub fn then<F>(mut self, name: &'static str, extract: F) -> Self
    where
        F: Fn(&RawRow) -> Option<T> + 'static,
    {
        self.rules.push(Rule {
            name,
            extract: Box::new(extract),
        });
        self
    }

    /// First value produced by any rule, in insertion order.
    pub fn resolve(&self, row: &RawRow) -> Option<T> {
        self.rules.iter().find_map(|rule| {
            let value = (rule.extract)(row)?;
            trace!("Fallback rule '{}' matched", rule.name);
            Some(value)
        })
    }
}
