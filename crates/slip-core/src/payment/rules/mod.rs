//! Field rules for payment slips: account identifiers, bank codes, amounts.

pub mod account_id;
pub mod amounts;
pub mod banks;

pub use account_id::{format_grouped, normalize_account_id, AccountIdNormalizer};
pub use amounts::{format_amount, parse_amount, AmountFormatter};
pub use banks::{resolve_bank, sort_code, BankRegistry};

/// Trait for rules that turn a raw extracted value into its display form.
///
/// Normalizers never fail: a value they cannot interpret maps to a
/// documented fallback.
pub trait FieldNormalizer {
    /// Normalize a single raw value.
    fn normalize(&self, raw: &str) -> String;
}
