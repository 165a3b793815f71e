//! Deterministic report column ordering.

use std::collections::HashSet;

use crate::models::fields::FieldMap;

/// Orders report columns: prioritized labels first, then the rest in the
/// order they were first seen.
#[derive(Debug, Clone, Default)]
pub struct ColumnOrderResolver {
    priority: Vec<String>,
}

impl ColumnOrderResolver {
    pub fn new<I, S>(priority: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            priority: priority.into_iter().map(Into::into).collect(),
        }
    }

    pub fn priority(&self) -> &[String] {
        &self.priority
    }

    /// Resolve the column order for a batch of records.
    ///
    /// Records are scanned front to back, keys in insertion order, so the
    /// result is stable as long as the batch order is.
    pub fn resolve<'a, I>(&self, records: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a FieldMap>,
    {
        resolve_column_order(&self.priority, &first_seen_keys(records))
    }
}

/// Distinct keys across `records`, in first-seen order.
pub fn first_seen_keys<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a FieldMap>,
{
    let mut seen = HashSet::new();
    let mut order = Vec::new();

    for record in records {
        for key in record.keys() {
            if seen.insert(key) {
                order.push(key.to_string());
            }
        }
    }

    order
}

/// Order `present` columns: labels of `priority` that are present, in
/// priority order, followed by the remaining present labels in their given
/// (first-seen) order. Never sorts.
pub fn resolve_column_order<P: AsRef<str>>(priority: &[P], present: &[String]) -> Vec<String> {
    let present_set: HashSet<&str> = present.iter().map(String::as_str).collect();
    let mut emitted: HashSet<&str> = HashSet::new();
    let mut columns = Vec::with_capacity(present.len());

    for label in priority {
        let label: &str = label.as_ref();
        if present_set.contains(label) && emitted.insert(label) {
            columns.push(label.to_string());
        }
    }

    for label in present {
        if emitted.insert(label.as_str()) {
            columns.push(label.clone());
        }
    }

    columns
}
