//! Scenic Processor Library
//!
//! Reconstructs tourist attraction records from the semi-structured text dump
//! written by the collector, and turns them into chart data and comment word
//! frequencies.
//!
//! This library provides tools for:
//! - Writing scraped attractions in the dump format
//! - Splitting a dump into per-attraction segments and extracting typed fields
//! - Admitting only records with a name and at least one score
//! - Building a polars table of the admitted records
//! - Histogram, correlation, top-rated and word cloud data for reporting

pub mod collector;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod report;
pub mod table;

pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::{ParserConfig, ReportConfig, ScenicConfig};
pub use error::{Result, ScenicError};
pub use models::{AttractionRecord, ParseResult, ParseStats, RawAttraction};
pub use parser::{AttractionParser, load_attractions};
pub use table::AttractionTable;
