//! Tabular report generation from canonical records.

pub mod columns;
pub mod labels;

pub use columns::{first_seen_keys, resolve_column_order, ColumnOrderResolver};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::models::canonical::CanonicalPaymentRecord;
use crate::models::config::ReportConfig;
use crate::models::fields::FieldMap;
use crate::payment::rules::AmountFormatter;

/// A string-only table ready for a spreadsheet or CSV writer.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Column headers, in output order.
    pub columns: Vec<String>,
    /// One row per record, in record order. Missing cells are empty strings.
    pub rows: Vec<Vec<String>>,
    /// When the report was built.
    pub generated_at: DateTime<Utc>,
}

impl Report {
    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows as header-keyed maps, in column order.
    pub fn row_maps(&self) -> Vec<FieldMap> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .zip(row)
                    .map(|(c, v)| (c.as_str(), v.as_str()))
                    .collect()
            })
            .collect()
    }
}

/// Builds reports: formats amounts, applies headers, orders columns.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    config: ReportConfig,
    formatter: AmountFormatter,
}

impl ReportBuilder {
    pub fn new(config: ReportConfig) -> Self {
        let formatter = AmountFormatter::new().with_currency_symbol(config.currency_symbol.clone());
        Self { config, formatter }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Build a report. Row order follows `records`.
    pub fn build(&self, records: &[CanonicalPaymentRecord]) -> Report {
        let labeled: Vec<FieldMap> = records.iter().map(|r| self.label_record(r)).collect();

        let resolver = ColumnOrderResolver::new(self.config.priority_columns.iter().cloned());
        let columns = resolver.resolve(&labeled);

        let rows = labeled
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|c| record.get(c).unwrap_or("").to_string())
                    .collect()
            })
            .collect();

        info!(rows = records.len(), columns = columns.len(), "built report");

        Report {
            columns,
            rows,
            generated_at: Utc::now(),
        }
    }

    /// Format amount fields and rename canonical keys to display headers.
    ///
    /// A document-specific key equal to a header already taken by a canonical
    /// field is dropped from the row.
    fn label_record(&self, record: &CanonicalPaymentRecord) -> FieldMap {
        let mut labeled = FieldMap::new();

        for (key, value) in record.fields().iter() {
            let value = if self.config.amount_columns.iter().any(|c| c == key) {
                self.formatter.format(value)
            } else {
                value.to_string()
            };

            match self.header_for(key) {
                Some(header) => {
                    labeled.insert(header, value);
                }
                None if labeled.contains_key(key) => {
                    debug!(key, "dropping field shadowed by a canonical header");
                }
                None => {
                    labeled.insert(key, value);
                }
            }
        }

        labeled
    }

    fn header_for(&self, key: &str) -> Option<&str> {
        if !self.config.rename_columns {
            return None;
        }
        self.config.column_labels.get(key).map(String::as_str)
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::{RawExtractedRecord, SourceRecord};
    use crate::payment::{RecordProcessor, SlipPipeline};
    use pretty_assertions::assert_eq;

    fn records(bodies: &[(&str, &str)]) -> Vec<CanonicalPaymentRecord> {
        let batch: Vec<SourceRecord> = bodies
            .iter()
            .map(|(name, body)| SourceRecord::new(*name, RawExtractedRecord::from_response(body).unwrap()))
            .collect();
        SlipPipeline::new().process_batch(&batch)
    }

    #[test]
    fn test_build_report() {
        let records = records(&[
            (
                "a.pdf",
                r#"{"amount": "1234.5", "charges": -2, "sender_iban": "GR16 0110 1250 0000 0001 2300 695",
                    "dynamic_fields": {"Κανάλι": "web", "Σημείωση": "x"}}"#,
            ),
            ("b.pdf", r#"{"amount": "abc", "dynamic_fields": {"Valeur": "01/01/2024"}}"#),
        ]);

        let report = ReportBuilder::default().build(&records);

        assert_eq!(report.len(), 2);
        assert_eq!(report.columns[0], "ΤΡΑΠΕΖΑ (ΧΡΕΩΣΗ)");

        let rows = report.row_maps();
        assert_eq!(rows[0].get("ΠΟΣΟ"), Some("1.234,50 €"));
        assert_eq!(rows[0].get("ΕΞΟΔΑ"), Some("2,00 €"));
        assert_eq!(rows[0].get("ΤΡΑΠΕΖΑ (ΧΡΕΩΣΗ)"), Some("NATIONAL BANK OF GREECE"));
        assert_eq!(rows[1].get("ΠΟΣΟ"), Some("abc"));
        assert_eq!(rows[1].get("Κανάλι"), Some(""));
        assert_eq!(rows[0].get("Valeur"), Some(""));

        // Prioritized labels before the rest; the rest in first-seen order.
        let pos = |c: &str| report.columns.iter().position(|x| x == c).unwrap();
        assert!(pos("Κανάλι") < pos("Valeur"));
        assert!(pos("Valeur") < pos("bank_name_header"));
        assert!(pos("bank_name_header") < pos("Σημείωση"));
    }

    #[test]
    fn test_every_row_has_every_column() {
        let records = records(&[
            ("a.pdf", r#"{"extra_fields": {"X": "1"}}"#),
            ("b.pdf", r#"{"extra_fields": {"Y": "2"}}"#),
        ]);

        let report = ReportBuilder::default().build(&records);
        for row in &report.rows {
            assert_eq!(row.len(), report.columns.len());
        }
    }

    #[test]
    fn test_without_renaming() {
        let config = ReportConfig {
            rename_columns: false,
            priority_columns: vec!["amount".to_string(), "date".to_string()],
            ..ReportConfig::default()
        };
        let records = records(&[("a.pdf", r#"{"date": "01/02/2024", "amount": 3}"#)]);

        let report = ReportBuilder::new(config).build(&records);

        assert_eq!(&report.columns[..3], &["amount", "date", "bank_name_header"]);
        assert_eq!(report.rows[0][0], "3,00 €");
    }

    #[test]
    fn test_extra_shadowed_by_header() {
        let records = records(&[("a.pdf", r#"{"amount": "10", "extra_fields": {"ΠΟΣΟ": "ten"}}"#)]);
        let report = ReportBuilder::default().build(&records);
        let rows = report.row_maps();

        assert_eq!(rows[0].get("ΠΟΣΟ"), Some("10,00 €"));
        assert_eq!(report.columns.iter().filter(|c| *c == "ΠΟΣΟ").count(), 1);
    }
}
