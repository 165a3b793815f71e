//! Canonical payment records produced by the normalization pipeline.

use serde::{Deserialize, Serialize};

use super::fields::FieldMap;

/// Keys of the fixed canonical fields.
pub mod keys {
    pub const BANK_NAME_HEADER: &str = "bank_name_header";
    pub const TRANSACTION_ID: &str = "transaction_id";
    pub const DATE: &str = "date";
    pub const AMOUNT: &str = "amount";
    pub const CHARGES: &str = "charges";
    pub const SENDER_IBAN: &str = "sender_iban";
    pub const RECIPIENT_IBAN: &str = "recipient_iban";
    pub const BENEFICIARY_NAME: &str = "beneficiary_name";
    pub const FINAL_DEBIT_BANK: &str = "final_debit_bank";
    pub const FINAL_CREDIT_BANK: &str = "final_credit_bank";
    pub const SAME_BANK_CHECK: &str = "same_bank_check";
    pub const FILENAME: &str = "filename";

    /// Fixed fields, in the order they appear in a canonical record.
    pub const FIXED: [&str; 12] = [
        BANK_NAME_HEADER,
        TRANSACTION_ID,
        DATE,
        AMOUNT,
        CHARGES,
        SENDER_IBAN,
        RECIPIENT_IBAN,
        BENEFICIARY_NAME,
        FINAL_DEBIT_BANK,
        FINAL_CREDIT_BANK,
        SAME_BANK_CHECK,
        FILENAME,
    ];

    /// Check if `key` names a fixed canonical field.
    pub fn is_fixed(key: &str) -> bool {
        FIXED.contains(&key)
    }
}

/// Fully normalized, reconciled and flattened record for one source document.
///
/// Every field is a string. Fixed fields are always present (possibly empty);
/// document-specific fields follow them in the order they were extracted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalPaymentRecord {
    fields: FieldMap,
}

impl CanonicalPaymentRecord {
    pub fn new(fields: FieldMap) -> Self {
        Self { fields }
    }

    /// Value of `key`, if the record carries it.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key)
    }

    /// Value of `key`, or the empty string when absent.
    pub fn value(&self, key: &str) -> &str {
        self.fields.get(key).unwrap_or("")
    }

    /// Underlying attribute map.
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Consume the record, returning its attribute map.
    pub fn into_fields(self) -> FieldMap {
        self.fields
    }

    /// Document-specific fields, i.e. everything outside the fixed schema.
    pub fn extra_fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().filter(|(k, _)| !keys::is_fixed(k))
    }
}
