//! Command implementations for the scenic processor CLI

use anyhow::{Context, Result, bail};
use colored::*;
use std::path::Path;
use tracing::debug;

use super::args::{Args, Commands, ParseArgs, ReportArgs, resolve_input};
use crate::config::ScenicConfig;
use crate::models::ParseStats;
use crate::parser::AttractionParser;
use crate::report::AnalysisReport;
use crate::report::export::export_report;
use crate::table::AttractionTable;

/// Main entry point for CLI commands
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args)?;

    match args.command {
        Commands::Parse(parse_args) => run_parse(parse_args),
        Commands::Report(report_args) => run_report(report_args),
    }
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("scenic_processor={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

fn run_parse(args: ParseArgs) -> Result<()> {
    let input = resolve_input(&args.input);
    let config = ScenicConfig::default();
    let parser = AttractionParser::new(&config.parser).context("Failed to build record parser")?;

    let result = match parser.parse_file(&input) {
        Ok(result) => result,
        Err(e) if e.is_no_data() => {
            bail!("No attraction data available from {} ({}); stopping", input.display(), e)
        }
        Err(e) => return Err(e).context("Failed to parse attraction data"),
    };

    let stats = result.stats;
    let table = AttractionTable::new(result.records)
        .with_context(|| format!("No attraction data available from {}", input.display()))?;

    print_table(&table);
    print_stats(&stats);

    if let Some(output) = &args.output {
        table
            .write_parquet(output)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        println!(
            "\n{} {}",
            "Saved records to".bright_green(),
            output.display()
        );
    }

    Ok(())
}

fn run_report(args: ReportArgs) -> Result<()> {
    let input = resolve_input(&args.input);

    let mut config = ScenicConfig::default();
    if let Some(top) = args.top {
        config = config.with_top_n(top);
    }
    if let Some(bins) = args.bins {
        config = config.with_histogram_bins(bins);
    }
    if let Some(max_words) = args.max_words {
        config = config.with_max_words(max_words);
    }
    config.validate().context("Invalid report settings")?;

    let table = load(&input, &config)?;

    println!("{}", "Computing chart data...".bright_yellow());
    let report = AnalysisReport::build(&table, &config.report);
    report.print_summary();

    println!("\n{}", "Exporting report files...".bright_yellow());
    let output_dir = args.get_output_dir(&input);
    let files = export_report(&table, &report, &output_dir)
        .with_context(|| format!("Failed to export report to {}", output_dir.display()))?;

    for path in [&files.attractions, &files.histogram, &files.top_rated, &files.word_frequencies] {
        println!("  {} {}", "Wrote".bright_green(), path.display());
    }

    Ok(())
}

/// Parse the dump, turning the no-data signal into a command failure
fn load(input: &Path, config: &ScenicConfig) -> Result<AttractionTable> {
    let parser = AttractionParser::new(&config.parser).context("Failed to build record parser")?;

    match parser.load_table(input) {
        Some(table) => Ok(table),
        None => bail!(
            "No attraction data available from {}; stopping",
            input.display()
        ),
    }
}

fn print_table(table: &AttractionTable) {
    println!(
        "{:>4} | {:<20} | {:>8} | {:>6} | {:>8}",
        "#", "Name", "Heat", "Rating", "Comments"
    );
    println!("{}", "-".repeat(58));

    for record in table.records() {
        println!(
            "{:>4} | {:<20} | {:>8} | {:>6} | {:>8}",
            record.sequence_number,
            truncate(&record.name, 20),
            format_score(record.popularity, 1),
            format_score(record.rating, 1),
            record.comments.len()
        );
    }

    println!("\n{} attractions", table.len());
}

fn print_stats(stats: &ParseStats) {
    println!("\n{}", "Parse statistics".bright_yellow());
    println!("  Segments found:   {}", stats.segments_found);
    println!(
        "  Admitted:         {} ({:.1}%)",
        stats.records_admitted.to_string().bright_green(),
        stats.admission_rate()
    );
    println!("  Rejected:         {}", stats.records_rejected);

    if stats.malformed_values > 0 {
        println!(
            "  Malformed values: {}",
            stats.malformed_values.to_string().bright_red()
        );
        for warning in &stats.warnings {
            println!("    {}", warning.bright_black());
        }
    }
}

fn format_score(value: Option<f64>, precision: usize) -> String {
    value
        .map(|v| format!("{:.*}", precision, v))
        .unwrap_or_else(|| "-".into())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
