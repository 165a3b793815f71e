//! Domestic account identifier (IBAN) cleanup.

use super::FieldNormalizer;

/// Length of a domestic identifier: country marker, check digits, bank code,
/// branch check digit and account number.
pub const ACCOUNT_ID_LENGTH: usize = 27;

/// Country marker every domestic identifier starts with.
pub const COUNTRY_MARKER: &str = "GR";

/// Normalizer for extracted account identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountIdNormalizer;

impl AccountIdNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl FieldNormalizer for AccountIdNormalizer {
    fn normalize(&self, raw: &str) -> String {
        normalize_account_id(raw)
    }
}

/// Clean an extracted account identifier.
///
/// Keeps ASCII alphanumerics only, uppercases, and starts the result at the
/// first country marker. Anything before the marker (labels, OCR noise) is
/// dropped and the result is cut to [`ACCOUNT_ID_LENGTH`]. Identifiers without
/// a marker are rejected as the empty string. Short identifiers are returned
/// as they are.
pub fn normalize_account_id(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    match cleaned.find(COUNTRY_MARKER) {
        Some(idx) => cleaned[idx..].chars().take(ACCOUNT_ID_LENGTH).collect(),
        None => String::new(),
    }
}

/// Format an identifier in groups of 4 characters.
pub fn format_grouped(id: &str) -> String {
    id.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<Vec<char>>()
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<String>>()
        .join(" ")
}
