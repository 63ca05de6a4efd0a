//! Reporting over a parsed attraction table.
//!
//! Computes the data behind the charts (popularity histogram, popularity vs.
//! rating scatter, top-rated listing) and the comment word cloud. Rendering
//! images is left to downstream tools; the report is printed to the console
//! and exported as CSV/Parquet.

pub mod export;
pub mod stats;
pub mod wordcloud;

use chrono::{DateTime, Local};
use colored::*;

use crate::config::ReportConfig;
use crate::models::AttractionRecord;
use crate::table::AttractionTable;
use stats::{Correlation, HistogramBin, RecordSummary};
use wordcloud::TermFrequency;

/// Everything the charts and the word cloud need
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Local>,
    pub summary: RecordSummary,
    pub histogram: Vec<HistogramBin>,
    pub correlation: Correlation,
    pub top_rated: Vec<AttractionRecord>,
    pub word_frequencies: Vec<TermFrequency>,
}

impl AnalysisReport {
    pub fn build(table: &AttractionTable, config: &ReportConfig) -> Self {
        let records = table.records();
        Self {
            generated_at: Local::now(),
            summary: stats::summarize(records),
            histogram: stats::popularity_histogram(records, config.histogram_bins),
            correlation: stats::rating_correlation(records),
            top_rated: stats::top_rated(records, config.top_n),
            word_frequencies: wordcloud::term_frequencies(table.comments(), config),
        }
    }

    /// Print a human-readable summary to stdout
    pub fn print_summary(&self) {
        println!(
            "\n{} {}",
            "Attraction report".bright_green().bold(),
            self.generated_at.format("%Y-%m-%d %H:%M:%S").to_string().bright_black()
        );
        println!(
            "  {} {}",
            "Attractions:".bright_cyan(),
            self.summary.attractions.to_string().bright_white().bold()
        );
        println!(
            "  {} {}",
            "Comments:".bright_cyan(),
            self.summary.comments.to_string().bright_white()
        );
        if let Some(p) = &self.summary.popularity {
            println!(
                "  {} mean {:.1}, min {:.1}, max {:.1} ({} values)",
                "Popularity:".bright_cyan(),
                p.mean,
                p.min,
                p.max,
                p.count
            );
        }
        if let Some(r) = &self.summary.rating {
            println!(
                "  {} mean {:.2}, min {:.1}, max {:.1} ({} values)",
                "Rating:".bright_cyan(),
                r.mean,
                r.min,
                r.max,
                r.count
            );
        }
        match self.correlation.pearson {
            Some(r) => println!(
                "  {} r = {:.3} over {} attractions",
                "Popularity vs rating:".bright_cyan(),
                r,
                self.correlation.points.len()
            ),
            None => println!(
                "  {} not enough data",
                "Popularity vs rating:".bright_cyan()
            ),
        }

        if !self.histogram.is_empty() {
            println!("\n{}", "Popularity distribution".bright_yellow());
            let peak = self.histogram.iter().map(|b| b.count).max().unwrap_or(0).max(1);
            for bin in &self.histogram {
                let bar = "#".repeat(bin.count * 30 / peak);
                println!("  {:>7.1} - {:<7.1} {:>3} {}", bin.lower, bin.upper, bin.count, bar.green());
            }
        }

        if !self.top_rated.is_empty() {
            println!("\n{}", "Top rated".bright_yellow());
            for (rank, record) in self.top_rated.iter().enumerate() {
                println!(
                    "  {:>2}. {} {}",
                    rank + 1,
                    record.name.bright_white(),
                    format!("{:.1}", record.rating.unwrap_or_default()).bright_green()
                );
            }
        }

        if !self.word_frequencies.is_empty() {
            println!("\n{}", "Comment keywords".bright_yellow());
            let line: Vec<String> = self
                .word_frequencies
                .iter()
                .take(20)
                .map(|t| format!("{}({})", t.term, t.count))
                .collect();
            println!("  {}", line.join("  "));
        }
    }
}
