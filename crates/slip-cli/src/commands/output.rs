//! Report and record rendering.

use slip_core::models::canonical::{keys, CanonicalPaymentRecord};
use slip_core::payment::rules::{format_grouped, AmountFormatter};
use slip_core::report::Report;

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// CSV table
    Csv,
    /// JSON document with columns and rows
    Json,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// Render a report in the given format.
pub fn format_report(report: &Report, format: ReportFormat) -> anyhow::Result<String> {
    match format {
        ReportFormat::Csv => format_report_csv(report),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Render a report as CSV with a header row.
pub fn format_report_csv(report: &Report) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(&report.columns)?;
    for row in &report.rows {
        wtr.write_record(row)?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

/// Render a canonical record as a human-readable summary.
pub fn format_record_text(record: &CanonicalPaymentRecord, formatter: &AmountFormatter) -> String {
    let mut output = String::new();

    if let Some(source) = record.get(keys::FILENAME) {
        output.push_str(&format!("Source: {}\n", source));
    }
    output.push_str(&format!("Transaction: {}\n", record.value(keys::TRANSACTION_ID)));
    output.push_str(&format!("Date: {}\n", record.value(keys::DATE)));
    output.push_str(&format!("Amount: {}\n", formatter.format(record.value(keys::AMOUNT))));
    output.push_str(&format!("Charges: {}\n", formatter.format(record.value(keys::CHARGES))));
    output.push('\n');

    output.push_str("Debit:\n");
    output.push_str(&format!("  {}\n", record.value(keys::FINAL_DEBIT_BANK)));
    output.push_str(&format!("  {}\n", format_grouped(record.value(keys::SENDER_IBAN))));
    output.push('\n');

    output.push_str("Credit:\n");
    output.push_str(&format!("  {}\n", record.value(keys::FINAL_CREDIT_BANK)));
    output.push_str(&format!("  {}\n", format_grouped(record.value(keys::RECIPIENT_IBAN))));
    output.push_str(&format!("  Beneficiary: {}\n", record.value(keys::BENEFICIARY_NAME)));
    output.push('\n');

    output.push_str(&format!("Same bank: {}\n", record.value(keys::SAME_BANK_CHECK)));

    let extras: Vec<(&str, &str)> = record.extra_fields().collect();
    if !extras.is_empty() {
        output.push_str("\nDocument fields:\n");
        for (key, value) in extras {
            output.push_str(&format!("  {}: {}\n", key, value));
        }
    }

    output
}
