//! Record parser for attraction text dumps.
//!
//! Turns the semi-structured file written by the collector back into typed
//! records:
//!
//! - [`segments`] - splitting the document at attraction headers
//! - [`fields`] - ordered rule table applied to each segment's lines
//! - [`validation`] - admission rule for candidate records
//!
//! [`AttractionParser::parse_file`] reports failures as typed errors;
//! [`AttractionParser::load_table`] folds every failure into the no-data
//! signal (`None`) after logging a diagnostic.

pub mod fields;
pub mod segments;
pub mod validation;

#[cfg(test)]
mod tests;

use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, error, info, warn};

use crate::config::ParserConfig;
use crate::error::{Result, ScenicError};
use crate::models::{ParseResult, ParseStats};
use crate::table::AttractionTable;
use fields::FieldRules;
use segments::SegmentSplitter;

/// Parser for attraction dumps, built once per label configuration
#[derive(Debug, Clone)]
pub struct AttractionParser {
    splitter: SegmentSplitter,
    rules: FieldRules,
}

impl AttractionParser {
    pub fn new(config: &ParserConfig) -> Result<Self> {
        Ok(Self {
            splitter: SegmentSplitter::new(config)?,
            rules: FieldRules::new(config)?,
        })
    }

    /// Parse a document already held in memory
    pub fn parse_str(&self, text: &str) -> ParseResult {
        let mut stats = ParseStats::new();

        let segments = self.splitter.split(text);
        stats.segments_found = segments.len();

        let candidates: Vec<_> = segments
            .iter()
            .map(|segment| self.rules.extract(segment, &mut stats))
            .collect();

        let (records, rejected) = validation::admit(candidates);
        stats.records_admitted = records.len();
        stats.records_rejected = rejected;

        debug!(
            "Parsed {} segments: {} admitted, {} rejected, {} malformed values",
            stats.segments_found, stats.records_admitted, stats.records_rejected, stats.malformed_values
        );

        ParseResult { records, stats }
    }

    /// Read and parse a dump file.
    ///
    /// Fails with `FileNotFound` when the path does not exist, `ParseFailed`
    /// for any other read error, and `EmptyResult` when no record is admitted.
    pub fn parse_file(&self, path: &Path) -> Result<ParseResult> {
        info!("Parsing attraction file: {}", path.display());

        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ScenicError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => ScenicError::ParseFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        })?;

        let text = decode(bytes, path);
        let result = self.parse_str(&text);

        if result.records.is_empty() {
            return Err(ScenicError::EmptyResult {
                path: path.to_path_buf(),
            });
        }

        info!(
            "Parsed {} attractions from {} segments",
            result.stats.records_admitted, result.stats.segments_found
        );
        Ok(result)
    }

    /// Parse a dump file into a non-empty table, or `None` when there is no data
    pub fn load_table(&self, path: &Path) -> Option<AttractionTable> {
        match self.parse_file(path) {
            Ok(result) => AttractionTable::new(result.records),
            Err(ScenicError::FileNotFound { path }) => {
                error!("File not found: {}", path.display());
                None
            }
            Err(ScenicError::EmptyResult { path }) => {
                warn!("No usable attraction records in {}", path.display());
                None
            }
            Err(e) => {
                error!("Failed to parse attraction data: {}", e);
                None
            }
        }
    }
}

/// Parse `path` with the default labels
pub fn load_attractions(path: &Path) -> Option<AttractionTable> {
    match AttractionParser::new(&ParserConfig::default()) {
        Ok(parser) => parser.load_table(path),
        Err(e) => {
            error!("Failed to build parser: {}", e);
            None
        }
    }
}

/// Decode as UTF-8, dropping only the byte runs that do not decode
fn decode(bytes: Vec<u8>, path: &Path) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("Dropping invalid UTF-8 bytes in {}", path.display());
            e.as_bytes().utf8_chunks().map(|chunk| chunk.valid()).collect()
        }
    }
}
