//! Process command - normalize a single extraction response.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::info;

use slip_core::models::record::RawExtractedRecord;
use slip_core::payment::rules::AmountFormatter;
use slip_core::payment::{RecordProcessor, SlipPipeline};
use slip_core::report::ReportBuilder;

use super::output::{format_record_text, format_report_csv};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Extraction response file (JSON)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Source document name (default: input file name without .json)
    #[arg(long)]
    source: Option<String>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Canonical record as JSON
    Json,
    /// Single-row report as CSV
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let body = fs::read_to_string(&args.input)?;
    let raw = RawExtractedRecord::from_response(&body)?;

    let source = args
        .source
        .clone()
        .unwrap_or_else(|| super::source_name(&args.input));

    let pipeline = SlipPipeline::from_config(&config);
    let record = pipeline.process(&raw, Some(&source));

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&record)?,
        OutputFormat::Csv => {
            let report = ReportBuilder::new(config.report.clone()).build(std::slice::from_ref(&record));
            format_report_csv(&report)?
        }
        OutputFormat::Text => {
            let formatter = AmountFormatter::new().with_currency_symbol(config.report.currency_symbol.clone());
            format_record_text(&record, &formatter)
        }
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    info!("Processed {} in {:?}", source, start.elapsed());

    Ok(())
}
