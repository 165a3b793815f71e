//! Payment slip normalization and reconciliation.

mod merge;
mod pipeline;
mod reconcile;
pub mod rules;

pub use merge::{DynamicFieldMerger, FieldCollision, MergeOutcome, MergePolicy};
pub use pipeline::SlipPipeline;
pub use reconcile::{Reconciliation, RecordReconciler, SameBankCheck};

use crate::models::canonical::CanonicalPaymentRecord;
use crate::models::record::{RawExtractedRecord, SourceRecord};

/// Trait for turning raw extracted records into canonical ones.
pub trait RecordProcessor {
    /// Process one record extracted from the document named `source`.
    fn process(&self, raw: &RawExtractedRecord, source: Option<&str>) -> CanonicalPaymentRecord;

    /// Process records in order. Output order matches input order.
    fn process_batch(&self, batch: &[SourceRecord]) -> Vec<CanonicalPaymentRecord> {
        batch
            .iter()
            .map(|doc| self.process(&doc.raw, doc.source.as_deref()))
            .collect()
    }
}
