//! Debit/credit bank reconciliation.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::rules::{normalize_account_id, sort_code, BankRegistry};
use crate::models::record::RawExtractedRecord;

/// Whether the debited and credited accounts belong to the same bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SameBankCheck {
    Yes,
    No,
    /// At least one identifier is too short to carry a sort code.
    Unknown,
}

impl SameBankCheck {
    /// Compare the sort codes of two cleaned identifiers.
    pub fn compare(sender_id: &str, recipient_id: &str) -> Self {
        match (sort_code(sender_id), sort_code(recipient_id)) {
            (Some(a), Some(b)) if a == b => Self::Yes,
            (Some(_), Some(_)) => Self::No,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for SameBankCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of reconciling one raw record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Cleaned debited account identifier.
    pub sender_iban: String,
    /// Cleaned credited account identifier.
    pub recipient_iban: String,
    /// Debiting bank: resolved from the sender identifier, else the header.
    pub final_debit_bank: String,
    /// Crediting bank, resolved from the recipient identifier only.
    pub final_credit_bank: String,
    pub same_bank_check: SameBankCheck,
}

/// Derives bank identities and the same-bank flag for raw records.
#[derive(Debug, Clone)]
pub struct RecordReconciler {
    registry: Arc<BankRegistry>,
}

impl RecordReconciler {
    /// Create a reconciler over the built-in domestic registry.
    pub fn new() -> Self {
        Self::with_registry(Arc::new(BankRegistry::new()))
    }

    /// Create a reconciler over a shared registry.
    pub fn with_registry(registry: Arc<BankRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &BankRegistry {
        &self.registry
    }

    /// Reconcile a raw record. Never fails.
    pub fn reconcile(&self, raw: &RawExtractedRecord) -> Reconciliation {
        let sender_iban = normalize_account_id(raw.sender_iban.as_deref().unwrap_or(""));
        let recipient_iban = normalize_account_id(raw.recipient_iban.as_deref().unwrap_or(""));

        let sender_bank = self.registry.resolve(&sender_iban);
        let recipient_bank = self.registry.resolve(&recipient_iban);

        // Header names the issuing bank only, so it never feeds the credit side.
        let final_debit_bank = if sender_bank.is_empty() {
            raw.bank_name_header.clone().unwrap_or_default()
        } else {
            sender_bank
        };

        let same_bank_check = SameBankCheck::compare(&sender_iban, &recipient_iban);

        trace!(
            sender = %sender_iban,
            recipient = %recipient_iban,
            debit = %final_debit_bank,
            credit = %recipient_bank,
            same_bank = %same_bank_check,
            "reconciled record"
        );

        Reconciliation {
            sender_iban,
            recipient_iban,
            final_debit_bank,
            final_credit_bank: recipient_bank,
            same_bank_check,
        }
    }
}

impl Default for RecordReconciler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NBG: &str = "GR1601101250000000012300695";
    const NBG_OTHER: &str = "GR4401100000000000099999999";
    const ALPHA: &str = "GR1601400000000000012345678";

    fn raw(sender: Option<&str>, recipient: Option<&str>, header: Option<&str>) -> RawExtractedRecord {
        RawExtractedRecord {
            sender_iban: sender.map(String::from),
            recipient_iban: recipient.map(String::from),
            bank_name_header: header.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_same_bank_check_exhaustive() {
        // (sender, recipient, expected)
        let cases = [
            ("", "", SameBankCheck::Unknown),
            ("GR16011", NBG, SameBankCheck::Unknown),
            (NBG, "GR16011", SameBankCheck::Unknown),
            ("GR16011", "GR16011", SameBankCheck::Unknown),
            (NBG, NBG_OTHER, SameBankCheck::Yes),
            ("GR160110", "GR990110", SameBankCheck::Yes),
            (NBG, ALPHA, SameBankCheck::No),
            ("GR160110", "GR160140", SameBankCheck::No),
        ];

        for (sender, recipient, expected) in cases {
            assert_eq!(
                SameBankCheck::compare(sender, recipient),
                expected,
                "{sender:?} vs {recipient:?}"
            );
        }
    }

    #[test]
    fn test_header_fallback_for_debit_only() {
        let reconciler = RecordReconciler::new();
        let result = reconciler.reconcile(&raw(
            Some("GR16 0110 1250 0000 0001 2300 695"),
            Some(""),
            Some("ALPHA BANK"),
        ));

        assert_eq!(result.sender_iban, NBG);
        assert_eq!(result.recipient_iban, "");
        assert_eq!(result.final_debit_bank, "NATIONAL BANK OF GREECE");
        assert_eq!(result.final_credit_bank, "");
        assert_eq!(result.same_bank_check, SameBankCheck::Unknown);
    }

    #[test]
    fn test_header_used_when_sender_missing() {
        let reconciler = RecordReconciler::new();
        let result = reconciler.reconcile(&raw(None, Some(ALPHA), Some("EUROBANK")));

        assert_eq!(result.final_debit_bank, "EUROBANK");
        assert_eq!(result.final_credit_bank, "ALPHA BANK");
    }

    #[test]
    fn test_debit_empty_without_any_source() {
        let reconciler = RecordReconciler::new();
        let result = reconciler.reconcile(&raw(Some("not an account"), None, None));

        assert_eq!(result.final_debit_bank, "");
        assert_eq!(result.same_bank_check, SameBankCheck::Unknown);
    }

    #[test]
    fn test_unknown_sort_code_beats_header() {
        let reconciler = RecordReconciler::new();
        let result = reconciler.reconcile(&raw(Some("GR1699990000000000000000000"), None, Some("ALPHA BANK")));

        assert_eq!(result.final_debit_bank, "UNKNOWN (9999)");
    }

    #[test]
    fn test_custom_registry() {
        let registry = Arc::new(BankRegistry::new().with_overrides([("9999", "TEST BANK")]));
        let reconciler = RecordReconciler::with_registry(registry);
        let result = reconciler.reconcile(&raw(Some("GR1699990000"), Some("GR1699991111"), None));

        assert_eq!(result.final_debit_bank, "TEST BANK");
        assert_eq!(result.final_credit_bank, "TEST BANK");
        assert_eq!(result.same_bank_check, SameBankCheck::Yes);
    }
}
