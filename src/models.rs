//! Core data structures for attraction processing.
//!
//! Defines the parsed attraction record, the raw record handed over by the
//! scraper, and the statistics collected while parsing a dump.

use serde::{Deserialize, Serialize};

/// One attraction reconstructed from the text dump
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttractionRecord {
    /// 1-based position of the attraction's segment in the document
    pub sequence_number: u32,
    pub name: String,
    pub popularity: Option<f64>,
    pub rating: Option<f64>,
    pub comments: Vec<String>,
}

/// Attraction as scraped from a detail page, before it is written to disk.
///
/// Values are kept as the raw text the page carried; the parser is the only
/// place that interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAttraction {
    pub name: Option<String>,
    pub popularity: Option<String>,
    pub rating: Option<String>,
    pub address: Option<String>,
    pub comments: Vec<String>,
}

/// Parsing statistics for one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Header markers found in the document
    pub segments_found: usize,

    /// Candidates that passed the admission rule
    pub records_admitted: usize,

    /// Candidates dropped by the admission rule
    pub records_rejected: usize,

    /// Popularity/rating lines whose value was not a decimal
    pub malformed_values: usize,

    /// Human-readable notes about degraded lines
    pub warnings: Vec<String>,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a popularity/rating value that could not be read
    pub fn add_malformed(&mut self, message: String) {
        self.malformed_values += 1;
        self.warnings.push(message);
    }

    /// Share of segments that became records, as a percentage
    pub fn admission_rate(&self) -> f64 {
        if self.segments_found == 0 {
            0.0
        } else {
            (self.records_admitted as f64 / self.segments_found as f64) * 100.0
        }
    }
}

/// Records admitted from one document together with how they were obtained
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    pub records: Vec<AttractionRecord>,
    pub stats: ParseStats,
}
