//! Command-line argument definitions for the scenic processor

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::default_input_path;

/// Parse scraped attraction dumps and report on them
#[derive(Debug, Clone, Parser)]
#[command(
    name = "scenic-processor",
    version,
    about = "Parse scraped tourist attraction dumps into records, chart data and word frequencies"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a dump and list the admitted attractions
    Parse(ParseArgs),
    /// Parse a dump and export chart data and comment word frequencies
    Report(ReportArgs),
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ParseArgs {
    /// Attraction dump (defaults to 绍兴景点数据.txt on the desktop)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Write the parsed records to this Parquet file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ReportArgs {
    /// Attraction dump (defaults to 绍兴景点数据.txt on the desktop)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Directory for exported files (defaults to the input's directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Number of attractions in the top-rated listing
    #[arg(long)]
    pub top: Option<usize>,

    /// Number of popularity histogram bins
    #[arg(long)]
    pub bins: Option<usize>,

    /// Maximum number of words in the word cloud
    #[arg(long)]
    pub max_words: Option<usize>,
}

impl Args {
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

/// Resolve an optional input path against the default location
pub fn resolve_input(input: &Option<PathBuf>) -> PathBuf {
    input.clone().unwrap_or_else(default_input_path)
}

impl ReportArgs {
    /// Output directory, defaulting to the directory holding the input
    pub fn get_output_dir(&self, input: &std::path::Path) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => input
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}
