//! Flattening of document-specific fields into canonical records.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::fields::FieldMap;

/// What to do when a document-specific key matches a field already present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// Keep the existing (canonical) value and drop the extra one.
    #[default]
    PreserveCanonical,
    /// Overwrite the existing value with the extra one.
    ExtraWins,
}

/// A document-specific field that collided with an existing key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCollision {
    pub key: String,
    /// Value left in the record.
    pub kept: String,
    /// Value that was discarded.
    pub discarded: String,
}

/// Result of a merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Flattened fields.
    pub fields: FieldMap,
    /// Key collisions, in extra-field order.
    pub collisions: Vec<FieldCollision>,
}

/// Copies extra fields to the top level of a record under their own labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicFieldMerger {
    policy: MergePolicy,
}

impl DynamicFieldMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the collision policy.
    pub fn with_policy(mut self, policy: MergePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> MergePolicy {
        self.policy
    }

    /// Merge `extras` into `fields`. Keys are copied verbatim.
    pub fn merge(&self, mut fields: FieldMap, extras: Option<&FieldMap>) -> MergeOutcome {
        let mut collisions = Vec::new();

        for (key, value) in extras.into_iter().flat_map(|m| m.iter()) {
            let Some(existing) = fields.get(key) else {
                fields.insert(key, value);
                continue;
            };

            let collision = match self.policy {
                MergePolicy::PreserveCanonical => FieldCollision {
                    key: key.to_string(),
                    kept: existing.to_string(),
                    discarded: value.to_string(),
                },
                MergePolicy::ExtraWins => {
                    let previous = existing.to_string();
                    fields.insert(key, value);
                    FieldCollision {
                        key: key.to_string(),
                        kept: value.to_string(),
                        discarded: previous,
                    }
                }
            };

            warn!(
                key = %collision.key,
                kept = %collision.kept,
                discarded = %collision.discarded,
                "extra field collides with existing field"
            );
            collisions.push(collision);
        }

        MergeOutcome { fields, collisions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fields(pairs: &[(&str, &str)]) -> FieldMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_merge_appends_in_order() {
        let merger = DynamicFieldMerger::new();
        let outcome = merger.merge(
            fields(&[("amount", "10")]),
            Some(&fields(&[("Ώρα καταχωρήσεως", "09:15"), ("Valeur", "02/03/2024")])),
        );

        assert_eq!(
            outcome.fields.keys().collect::<Vec<_>>(),
            vec!["amount", "Ώρα καταχωρήσεως", "Valeur"]
        );
        assert!(outcome.collisions.is_empty());
    }

    #[test]
    fn test_merge_without_extras() {
        let merger = DynamicFieldMerger::new();
        let outcome = merger.merge(fields(&[("amount", "10")]), None);

        assert_eq!(outcome.fields, fields(&[("amount", "10")]));
    }

    #[test]
    fn test_collision_preserves_canonical_by_default() {
        let merger = DynamicFieldMerger::new();
        let outcome = merger.merge(
            fields(&[("sender_iban", "GR1601101250000000012300695")]),
            Some(&fields(&[("sender_iban", "gr16 0110 garbage")])),
        );

        assert_eq!(outcome.fields.get("sender_iban"), Some("GR1601101250000000012300695"));
        assert_eq!(
            outcome.collisions,
            vec![FieldCollision {
                key: "sender_iban".to_string(),
                kept: "GR1601101250000000012300695".to_string(),
                discarded: "gr16 0110 garbage".to_string(),
            }]
        );
    }

    #[test]
    fn test_collision_extra_wins() {
        let merger = DynamicFieldMerger::new().with_policy(MergePolicy::ExtraWins);
        let outcome = merger.merge(
            fields(&[("date", "01/01/2024"), ("amount", "5")]),
            Some(&fields(&[("date", "2024-01-01")])),
        );

        assert_eq!(outcome.fields.get("date"), Some("2024-01-01"));
        // Overwritten key keeps its position.
        assert_eq!(outcome.fields.keys().collect::<Vec<_>>(), vec!["date", "amount"]);
        assert_eq!(outcome.collisions[0].discarded, "01/01/2024");
    }

    #[test]
    fn test_policy_serde() {
        let policy: MergePolicy = serde_json::from_str(r#""extra_wins""#).unwrap();
        assert_eq!(policy, MergePolicy::ExtraWins);
        assert_eq!(
            serde_json::to_string(&MergePolicy::PreserveCanonical).unwrap(),
            r#""preserve_canonical""#
        );
    }
}
