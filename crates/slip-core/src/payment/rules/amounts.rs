//! Amount formatting for the payment report.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use super::FieldNormalizer;

/// Default currency suffix.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "€";

/// Renders monetary magnitudes as `1.234,56 €`.
///
/// Direction (debit or credit) is carried by the field, so the sign is
/// dropped. Values that do not parse as numbers are passed through unchanged.
#[derive(Debug, Clone)]
pub struct AmountFormatter {
    currency_symbol: String,
}

impl AmountFormatter {
    pub fn new() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }

    /// Set the currency suffix.
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Format a raw amount.
    pub fn format(&self, raw: &str) -> String {
        match fixed_point(raw) {
            Some(fixed) => {
                let grouped = group_thousands(&fixed);
                if self.currency_symbol.is_empty() {
                    grouped
                } else {
                    format!("{} {}", grouped, self.currency_symbol)
                }
            }
            None => raw.to_string(),
        }
    }
}

impl Default for AmountFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldNormalizer for AmountFormatter {
    fn normalize(&self, raw: &str) -> String {
        self.format(raw)
    }
}

/// Parse the magnitude of a plain decimal number ("1234.5", "-50", "1e3").
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('-').unwrap_or(trimmed);

    Decimal::from_str(unsigned)
        .or_else(|_| Decimal::from_scientific(unsigned))
        .ok()
        .map(|d| d.abs())
}

/// Render the magnitude of `raw` with two decimals ("1234.50").
///
/// Magnitudes outside the `Decimal` range fall back to `f64`.
fn fixed_point(raw: &str) -> Option<String> {
    if let Some(amount) = parse_amount(raw) {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        return Some(format!("{:.2}", rounded));
    }

    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('-').unwrap_or(trimmed);
    unsigned
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(|f| format!("{:.2}", f.abs()))
}

/// Format an amount with default settings.
pub fn format_amount(raw: &str) -> String {
    AmountFormatter::new().format(raw)
}

fn group_thousands(fixed: &str) -> String {
    let (integer_part, decimal_part) = fixed.split_once('.').unwrap_or((fixed, "00"));

    let chars: Vec<char> = integer_part.chars().collect();
    let mut formatted = String::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push('.');
        }
        formatted.push(*c);
    }

    format!("{},{}", formatted, decimal_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount("1234.5"), "1.234,50 €");
        assert_eq!(format_amount("12345678.9"), "12.345.678,90 €");
        assert_eq!(format_amount("0"), "0,00 €");
        assert_eq!(format_amount("999.999"), "1.000,00 €");
    }

    #[test]
    fn test_format_drops_sign() {
        assert_eq!(format_amount("-50"), "50,00 €");
        assert_eq!(format_amount(" -1500.25 "), "1.500,25 €");
    }

    #[test]
    fn test_format_passthrough() {
        assert_eq!(format_amount("abc"), "abc");
        assert_eq!(format_amount(""), "");
        assert_eq!(format_amount("1.234,56 €"), "1.234,56 €");
    }

    #[test]
    fn test_format_scientific() {
        assert_eq!(format_amount("1e3"), "1.000,00 €");
    }

    #[test]
    fn test_format_beyond_decimal_range() {
        assert_eq!(
            format_amount("1e30"),
            "1.000.000.000.000.000.019.884.624.838.656,00 €"
        );
        assert_eq!(format_amount("-2.5e29"), "250.000.000.000.000.004.971.156.209.664,00 €");
        assert_eq!(format_amount("inf"), "inf");
        assert_eq!(format_amount("NaN"), "NaN");
    }

    #[test]
    fn test_custom_symbol() {
        let formatter = AmountFormatter::new().with_currency_symbol("EUR");
        assert_eq!(formatter.format("10"), "10,00 EUR");

        let bare = AmountFormatter::new().with_currency_symbol("");
        assert_eq!(bare.format("10"), "10,00");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("-12.30"), Some(Decimal::from_str("12.30").unwrap()));
        assert_eq!(parse_amount("n/a"), None);
    }
}
