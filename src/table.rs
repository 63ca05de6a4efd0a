//! Tabular record set handed from the parser to reporting.
//!
//! Wraps the admitted records (never empty) and converts them into a polars
//! `DataFrame` with the columns `sequence_number`, `name`, `popularity`,
//! `rating` and `comments` (list of strings).

use crate::error::Result;
use crate::models::AttractionRecord;
use polars::prelude::{Column, DataFrame, NamedFrom, ParquetCompression, ParquetWriter, Series};
use std::fs::File;
use std::path::Path;
use tracing::debug;

pub const COLUMN_SEQUENCE: &str = "sequence_number";
pub const COLUMN_NAME: &str = "name";
pub const COLUMN_POPULARITY: &str = "popularity";
pub const COLUMN_RATING: &str = "rating";
pub const COLUMN_COMMENTS: &str = "comments";

/// Non-empty set of admitted attraction records
#[derive(Debug, Clone, PartialEq)]
pub struct AttractionTable {
    records: Vec<AttractionRecord>,
}

impl AttractionTable {
    /// Wrap records; an empty set is the no-data signal and yields `None`
    pub fn new(records: Vec<AttractionRecord>) -> Option<Self> {
        if records.is_empty() {
            None
        } else {
            Some(Self { records })
        }
    }

    pub fn records(&self) -> &[AttractionRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<AttractionRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every comment of every attraction, in record order
    pub fn comments(&self) -> impl Iterator<Item = &str> {
        self.records
            .iter()
            .flat_map(|record| record.comments.iter().map(String::as_str))
    }

    /// Build the polars representation of the record set
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let sequence: Vec<u32> = self.records.iter().map(|r| r.sequence_number).collect();
        let names: Vec<&str> = self.records.iter().map(|r| r.name.as_str()).collect();
        let popularity: Vec<Option<f64>> = self.records.iter().map(|r| r.popularity).collect();
        let rating: Vec<Option<f64>> = self.records.iter().map(|r| r.rating).collect();
        let comments: Vec<Series> = self
            .records
            .iter()
            .map(|r| Series::new("".into(), r.comments.as_slice()))
            .collect();

        let df = DataFrame::new(vec![
            Column::new(COLUMN_SEQUENCE.into(), sequence),
            Column::new(COLUMN_NAME.into(), names),
            Column::new(COLUMN_POPULARITY.into(), popularity),
            Column::new(COLUMN_RATING.into(), rating),
            Column::new(COLUMN_COMMENTS.into(), comments),
        ])?;

        debug!("Built record frame with shape {:?}", df.shape());
        Ok(df)
    }

    /// Write the record set as a Snappy-compressed Parquet file
    pub fn write_parquet(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut df = self.to_dataframe()?;
        let file = File::create(path)?;
        ParquetWriter::new(file)
            .with_compression(ParquetCompression::Snappy)
            .finish(&mut df)?;

        debug!("Wrote {} records to {}", self.len(), path.display());
        Ok(())
    }
}
