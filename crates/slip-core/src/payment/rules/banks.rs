//! Registry of domestic bank sort codes.

use std::collections::BTreeMap;

use lazy_static::lazy_static;

/// Label used for sort codes missing from the registry.
pub const UNKNOWN_BANK_LABEL: &str = "UNKNOWN";

/// Offset of the sort code within a domestic identifier.
const SORT_CODE_OFFSET: usize = 4;

/// Length of the sort code.
const SORT_CODE_LENGTH: usize = 4;

/// Domestic institutions, keyed by the 4-digit code following the country
/// marker and check digits.
const DOMESTIC_BANKS: [(&str, &str); 9] = [
    ("0110", "NATIONAL BANK OF GREECE"),
    ("0140", "ALPHA BANK"),
    ("0171", "PIRAEUS BANK"),
    ("0172", "PIRAEUS BANK"),
    ("0260", "EUROBANK"),
    ("0870", "ATTICA BANK"),
    ("0710", "PANCRETA BANK"),
    ("0690", "VIVA WALLET"),
    ("0026", "OPTIMA BANK"),
];

lazy_static! {
    static ref DOMESTIC_REGISTRY: BankRegistry = BankRegistry::new();
}

/// Immutable sort code to bank name lookup table.
///
/// Lookups never fail: [`BankRegistry::resolve`] maps an unknown code to a
/// labeled fallback that keeps the code visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankRegistry {
    codes: BTreeMap<String, String>,
}

impl BankRegistry {
    /// Registry with the built-in domestic banks.
    pub fn new() -> Self {
        DOMESTIC_BANKS.into_iter().collect()
    }

    /// Registry without any entries.
    pub fn empty() -> Self {
        Self {
            codes: BTreeMap::new(),
        }
    }

    /// Shared registry with the built-in domestic banks.
    pub fn domestic() -> &'static BankRegistry {
        &DOMESTIC_REGISTRY
    }

    /// Add entries, replacing existing codes.
    pub fn with_overrides<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.codes
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Bank name for a sort code.
    pub fn lookup(&self, code: &str) -> Option<&str> {
        self.codes.get(code).map(String::as_str)
    }

    /// Resolve the bank owning a cleaned account identifier.
    ///
    /// Returns the empty string for identifiers too short to carry a sort
    /// code, and `UNKNOWN (<code>)` for codes the registry does not know.
    pub fn resolve(&self, id: &str) -> String {
        match sort_code(id) {
            Some(code) => match self.lookup(code) {
                Some(name) => name.to_string(),
                None => format!("{} ({})", UNKNOWN_BANK_LABEL, code),
            },
            None => String::new(),
        }
    }

    /// Registered entries, ordered by sort code.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.codes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of registered codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for BankRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for BankRegistry {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::empty().with_overrides(iter)
    }
}

/// Sort code segment of an identifier (characters 5 to 8).
///
/// `None` when the identifier has fewer than 8 characters.
pub fn sort_code(id: &str) -> Option<&str> {
    let mut bounds = id
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(id.len()));

    let start = bounds.nth(SORT_CODE_OFFSET)?;
    let end = bounds.nth(SORT_CODE_LENGTH - 1)?;
    Some(&id[start..end])
}

/// Resolve a bank name using the built-in domestic registry.
pub fn resolve_bank(id: &str) -> String {
    BankRegistry::domestic().resolve(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sort_code() {
        assert_eq!(sort_code("GR1601101250000000012300695"), Some("0110"));
        assert_eq!(sort_code("GR160140"), Some("0140"));
        assert_eq!(sort_code("GR16014"), None);
        assert_eq!(sort_code(""), None);
    }

    #[test]
    fn test_resolve_known_code() {
        assert_eq!(resolve_bank("GR1601101250000000012300695"), "NATIONAL BANK OF GREECE");
        assert_eq!(resolve_bank("GR1601720000000000000000000"), "PIRAEUS BANK");
        assert_eq!(resolve_bank("GR1601710000000000000000000"), "PIRAEUS BANK");
    }

    #[test]
    fn test_resolve_unknown_code() {
        assert_eq!(resolve_bank("GR1699990000000000000000000"), "UNKNOWN (9999)");
    }

    #[test]
    fn test_resolve_too_short() {
        assert_eq!(resolve_bank("GR16011"), "");
        assert_eq!(resolve_bank(""), "");
    }

    #[test]
    fn test_overrides() {
        let registry = BankRegistry::new().with_overrides([("9999", "TEST BANK"), ("0140", "ALPHA")]);

        assert_eq!(registry.resolve("GR1699990000"), "TEST BANK");
        assert_eq!(registry.resolve("GR1601400000"), "ALPHA");
        assert_eq!(registry.len(), DOMESTIC_BANKS.len() + 1);
    }

    #[test]
    fn test_entries_sorted() {
        let codes: Vec<&str> = BankRegistry::domestic().entries().map(|(c, _)| c).collect();
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);
    }
}
