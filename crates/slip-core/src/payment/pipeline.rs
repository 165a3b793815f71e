//! Reconcile-then-merge pipeline for single records and batches.

use std::sync::Arc;

use tracing::debug;

use super::merge::{DynamicFieldMerger, MergePolicy};
use super::reconcile::RecordReconciler;
use super::rules::BankRegistry;
use super::RecordProcessor;
use crate::models::canonical::{keys, CanonicalPaymentRecord};
use crate::models::config::SlipConfig;
use crate::models::fields::FieldMap;
use crate::models::record::RawExtractedRecord;

/// Full normalization pipeline for payment slips.
#[derive(Debug, Clone, Default)]
pub struct SlipPipeline {
    reconciler: RecordReconciler,
    merger: DynamicFieldMerger,
}

impl SlipPipeline {
    /// Create a pipeline with the domestic registry and default merge policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline from configuration.
    pub fn from_config(config: &SlipConfig) -> Self {
        Self::new()
            .with_registry(Arc::new(config.bank_registry()))
            .with_merge_policy(config.merge.policy)
    }

    /// Use a specific bank registry.
    pub fn with_registry(mut self, registry: Arc<BankRegistry>) -> Self {
        self.reconciler = RecordReconciler::with_registry(registry);
        self
    }

    /// Set the collision policy for document-specific fields.
    pub fn with_merge_policy(mut self, policy: MergePolicy) -> Self {
        self.merger = self.merger.with_policy(policy);
        self
    }

    pub fn registry(&self) -> &BankRegistry {
        self.reconciler.registry()
    }
}

impl RecordProcessor for SlipPipeline {
    fn process(&self, raw: &RawExtractedRecord, source: Option<&str>) -> CanonicalPaymentRecord {
        let rec = self.reconciler.reconcile(raw);
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        let mut fields = FieldMap::new();
        fields.insert(keys::BANK_NAME_HEADER, text(&raw.bank_name_header));
        fields.insert(keys::TRANSACTION_ID, text(&raw.transaction_id));
        fields.insert(keys::DATE, text(&raw.date));
        fields.insert(keys::AMOUNT, text(&raw.amount));
        fields.insert(keys::CHARGES, text(&raw.charges));
        fields.insert(keys::SENDER_IBAN, rec.sender_iban);
        fields.insert(keys::RECIPIENT_IBAN, rec.recipient_iban);
        fields.insert(keys::BENEFICIARY_NAME, text(&raw.beneficiary_name));
        fields.insert(keys::FINAL_DEBIT_BANK, rec.final_debit_bank);
        fields.insert(keys::FINAL_CREDIT_BANK, rec.final_credit_bank);
        fields.insert(keys::SAME_BANK_CHECK, rec.same_bank_check.as_str());
        if let Some(source) = source {
            fields.insert(keys::FILENAME, source);
        }

        let additional = raw.additional_fields();
        let outcome = self.merger.merge(fields, Some(&additional));

        debug!(
            source = source.unwrap_or("-"),
            fields = outcome.fields.len(),
            collisions = outcome.collisions.len(),
            "processed record"
        );

        CanonicalPaymentRecord::new(outcome.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::SourceRecord;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_end_to_end_header_fallback() {
        let raw = RawExtractedRecord {
            sender_iban: Some("GR16 0110 1250 0000 0001 2300 695".to_string()),
            recipient_iban: Some(String::new()),
            bank_name_header: Some("ALPHA BANK".to_string()),
            ..Default::default()
        };

        let record = SlipPipeline::new().process(&raw, None);

        assert_eq!(record.value(keys::SENDER_IBAN), "GR1601101250000000012300695");
        assert_eq!(record.value(keys::FINAL_DEBIT_BANK), "NATIONAL BANK OF GREECE");
        assert_eq!(record.value(keys::FINAL_CREDIT_BANK), "");
        assert_eq!(record.value(keys::SAME_BANK_CHECK), "Unknown");
    }

    #[test]
    fn test_all_fixed_fields_present() {
        let record = SlipPipeline::new().process(&RawExtractedRecord::default(), None);

        for key in keys::FIXED.iter().filter(|k| **k != keys::FILENAME) {
            assert!(record.get(key).is_some(), "missing {key}");
        }
        assert_eq!(record.get(keys::FILENAME), None);
        assert_eq!(record.value(keys::SAME_BANK_CHECK), "Unknown");
    }

    #[test]
    fn test_extras_flattened_after_fixed_fields() {
        let raw = RawExtractedRecord::from_response(
            r#"{
                "amount": "120.00",
                "dynamic_fields": {"Κανάλι": "e-banking", "amount": "999"}
            }"#,
        )
        .unwrap();

        let record = SlipPipeline::new().process(&raw, Some("slip_01.pdf"));

        assert_eq!(record.value(keys::AMOUNT), "120.00");
        assert_eq!(record.value(keys::FILENAME), "slip_01.pdf");
        assert_eq!(record.extra_fields().collect::<Vec<_>>(), vec![("Κανάλι", "e-banking")]);
    }

    #[test]
    fn test_unrecognized_keys_between_fixed_and_extras() {
        let raw = RawExtractedRecord::from_response(
            r#"{
                "transaction_id": "T1",
                "dynamic_fields": {"Κανάλι": "web"},
                "Κατάστημα": "Athens 12"
            }"#,
        )
        .unwrap();

        let record = SlipPipeline::new().process(&raw, Some("a.pdf"));
        let order: Vec<&str> = record.fields().keys().collect();

        assert_eq!(&order[..keys::FIXED.len()], &keys::FIXED[..]);
        assert_eq!(&order[keys::FIXED.len()..], &["Κατάστημα", "Κανάλι"]);
        assert_eq!(record.value("Κατάστημα"), "Athens 12");
    }

    #[test]
    fn test_response_key_colliding_with_derived_field() {
        let raw = RawExtractedRecord::from_response(
            r#"{"sender_iban": "GR1601101250000000012300695", "final_debit_bank": "SOMEONE ELSE"}"#,
        )
        .unwrap();

        let record = SlipPipeline::new().process(&raw, None);
        assert_eq!(record.value(keys::FINAL_DEBIT_BANK), "NATIONAL BANK OF GREECE");
    }

    #[test]
    fn test_extra_wins_policy() {
        let raw = RawExtractedRecord::from_response(
            r#"{"date": "01/02/2024", "extra_fields": {"date": "2024-02-01"}}"#,
        )
        .unwrap();

        let pipeline = SlipPipeline::new().with_merge_policy(MergePolicy::ExtraWins);
        assert_eq!(pipeline.process(&raw, None).value(keys::DATE), "2024-02-01");
    }

    #[test]
    fn test_batch_preserves_order() {
        let batch: Vec<SourceRecord> = ["b.pdf", "a.pdf", "c.pdf"]
            .into_iter()
            .map(|name| SourceRecord::new(name, RawExtractedRecord::default()))
            .collect();

        let records = SlipPipeline::new().process_batch(&batch);
        let names: Vec<&str> = records.iter().map(|r| r.value(keys::FILENAME)).collect();

        assert_eq!(names, vec!["b.pdf", "a.pdf", "c.pdf"]);
    }

    #[test]
    fn test_from_config_uses_bank_overrides() {
        let mut config = SlipConfig::default();
        config.banks.insert("9999".to_string(), "TEST BANK".to_string());

        let raw = RawExtractedRecord {
            sender_iban: Some("GR16 9999 0000".to_string()),
            ..Default::default()
        };

        let record = SlipPipeline::from_config(&config).process(&raw, None);
        assert_eq!(record.value(keys::FINAL_DEBIT_BANK), "TEST BANK");
    }
}
