//! Writing report artefacts to disk.
//!
//! Chart data and word frequencies are written as CSV with polars, the
//! record table itself as Parquet (its comment column is a list, which CSV
//! cannot hold).

use std::fs::File;
use std::path::{Path, PathBuf};

use polars::prelude::{Column, CsvWriter, DataFrame, SerWriter};
use tracing::info;

use super::AnalysisReport;
use crate::constants::{ATTRACTIONS_PARQUET, HISTOGRAM_CSV, TOP_RATED_CSV, WORD_FREQUENCIES_CSV};
use crate::error::Result;
use crate::table::AttractionTable;

/// Paths of the files written by [`export_report`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    pub attractions: PathBuf,
    pub histogram: PathBuf,
    pub top_rated: PathBuf,
    pub word_frequencies: PathBuf,
}

/// Write the table and every report artefact into `output_dir`
pub fn export_report(
    table: &AttractionTable,
    report: &AnalysisReport,
    output_dir: &Path,
) -> Result<ExportedFiles> {
    std::fs::create_dir_all(output_dir)?;

    let files = ExportedFiles {
        attractions: output_dir.join(ATTRACTIONS_PARQUET),
        histogram: output_dir.join(HISTOGRAM_CSV),
        top_rated: output_dir.join(TOP_RATED_CSV),
        word_frequencies: output_dir.join(WORD_FREQUENCIES_CSV),
    };

    table.write_parquet(&files.attractions)?;
    write_csv(&mut histogram_frame(report)?, &files.histogram)?;
    write_csv(&mut top_rated_frame(report)?, &files.top_rated)?;
    write_csv(&mut word_frequency_frame(report)?, &files.word_frequencies)?;

    info!("Exported report to {}", output_dir.display());
    Ok(files)
}

pub fn histogram_frame(report: &AnalysisReport) -> Result<DataFrame> {
    let bins = &report.histogram;
    Ok(DataFrame::new(vec![
        Column::new("bin_start".into(), bins.iter().map(|b| b.lower).collect::<Vec<f64>>()),
        Column::new("bin_end".into(), bins.iter().map(|b| b.upper).collect::<Vec<f64>>()),
        Column::new("count".into(), bins.iter().map(|b| b.count as u32).collect::<Vec<u32>>()),
    ])?)
}

pub fn top_rated_frame(report: &AnalysisReport) -> Result<DataFrame> {
    let top = &report.top_rated;
    Ok(DataFrame::new(vec![
        Column::new("rank".into(), (1..=top.len() as u32).collect::<Vec<u32>>()),
        Column::new("name".into(), top.iter().map(|r| r.name.as_str()).collect::<Vec<&str>>()),
        Column::new("rating".into(), top.iter().map(|r| r.rating).collect::<Vec<Option<f64>>>()),
        Column::new(
            "popularity".into(),
            top.iter().map(|r| r.popularity).collect::<Vec<Option<f64>>>(),
        ),
    ])?)
}

pub fn word_frequency_frame(report: &AnalysisReport) -> Result<DataFrame> {
    let words = &report.word_frequencies;
    Ok(DataFrame::new(vec![
        Column::new("term".into(), words.iter().map(|t| t.term.as_str()).collect::<Vec<&str>>()),
        Column::new("count".into(), words.iter().map(|t| t.count as u32).collect::<Vec<u32>>()),
    ])?)
}

fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file).include_header(true).finish(df)?;
    Ok(())
}
