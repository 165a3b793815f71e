//! Batch command - build one report from many extraction responses.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use slip_core::models::config::SlipConfig;
use slip_core::models::record::{RawExtractedRecord, SourceRecord};
use slip_core::payment::{RecordProcessor, SlipPipeline};
use slip_core::report::ReportBuilder;

use super::output::{format_report, ReportFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Response files or glob pattern (e.g. "responses/*.json")
    #[arg(required = true)]
    input: String,

    /// Report file (default: next to the first input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ReportFormat,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    let mut files = collect_inputs(&args.input)?;

    files.retain(|p| !is_previous_report(p, &config, args.output.as_deref()));

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    // Column order depends on record order, so files are read in sorted order.
    let mut batch = Vec::with_capacity(files.len());
    let mut failed: Vec<(PathBuf, String)> = Vec::new();

    for path in &files {
        match read_response(path) {
            Ok(raw) => batch.push(SourceRecord::new(super::source_name(path), raw)),
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to read {}: {}", path.display(), error_msg);
                    failed.push((path.clone(), error_msg));
                } else {
                    error!("Failed to read {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    if batch.is_empty() {
        println!("{} No records could be read, no report written.", style("⚠").yellow());
        print_failures(&failed);
        return Ok(());
    }

    let pipeline = SlipPipeline::from_config(&config);
    let records = pipeline.process_batch(&batch);
    let report = ReportBuilder::new(config.report.clone()).build(&records);

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&files[0], &config, args.format));

    fs::write(&output_path, format_report(&report, args.format)?)?;
    debug!("Wrote report to {}", output_path.display());

    println!(
        "{} Report written to {}",
        style("✓").green(),
        output_path.display()
    );
    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        files.len(),
        start.elapsed()
    );
    println!(
        "   {} rows, {} columns, {} failed",
        style(report.len()).green(),
        report.columns.len(),
        style(failed.len()).red()
    );

    print_failures(&failed);

    Ok(())
}

/// Expand the input pattern into response files, sorted and deduplicated.
fn collect_inputs(pattern: &str) -> anyhow::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = glob(pattern)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("json"))
        })
        .collect();

    files.sort();
    files.dedup();
    Ok(files)
}

/// Whether `path` is a report written by an earlier run: the configured
/// default name, or the file this run is about to write.
fn is_previous_report(path: &Path, config: &SlipConfig, output: Option<&Path>) -> bool {
    let default_report = Path::new(&config.report.output_file_name).with_extension("json");
    if path.file_name() == default_report.file_name() {
        return true;
    }

    output.is_some_and(|output| same_file(path, output))
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

fn read_response(path: &Path) -> anyhow::Result<RawExtractedRecord> {
    let body = fs::read_to_string(path)?;
    Ok(RawExtractedRecord::from_response(&body)?)
}

fn default_output_path(first_input: &Path, config: &SlipConfig, format: ReportFormat) -> PathBuf {
    let dir = first_input.parent().unwrap_or_else(|| Path::new("."));
    dir.join(&config.report.output_file_name)
        .with_extension(format.extension())
}

fn print_failures(failed: &[(PathBuf, String)]) {
    if failed.is_empty() {
        return;
    }

    println!();
    println!("{}", style("Failed files:").red());
    for (path, error) in failed {
        println!("  - {}: {}", path.display(), error);
    }
}
