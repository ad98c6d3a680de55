//! Short-record filter
//!
//! The only step allowed to change the size of a collection. It drops
//! missing records and records that are too short to be worth modeling,
//! never reorders, and reports the before/after counts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the short-record filter runs, if at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterPlacement {
    #[default]
    Disabled,
    /// Before every stage, on the raw records
    First,
    /// After every stage, on the cleaned records
    Last,
}

impl fmt::Display for FilterPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterPlacement::Disabled => f.write_str("disabled"),
            FilterPlacement::First => f.write_str("first"),
            FilterPlacement::Last => f.write_str("last"),
        }
    }
}

/// Keeps present records strictly longer than `min_length` characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortRecordFilter {
    min_length: usize,
}

impl ShortRecordFilter {
    pub fn new(min_length: usize) -> Self {
        ShortRecordFilter { min_length }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Whether a single record passes
    pub fn keeps(&self, record: &str) -> bool {
        record.chars().count() > self.min_length
    }

    /// Filter a collection, preserving the order of the survivors
    pub fn filter<S, I>(&self, records: I) -> Vec<S>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = Option<S>>,
    {
        let mut input = 0usize;
        let kept: Vec<S> = records
            .into_iter()
            .inspect(|_| input += 1)
            .flatten()
            .filter(|record| self.keeps(record.as_ref()))
            .collect();
        tracing::info!(input, output = kept.len(), "filtered short records");
        kept
    }
}

impl Default for ShortRecordFilter {
    fn default() -> Self {
        Self::new(10)
    }
}
