//! Raw records produced by the document extraction service.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::fields::{value_to_text, FieldMap};
use crate::error::{ResponseError, Result};

/// Fields extracted from a single payment slip, before any normalization.
///
/// Every field is optional: the extraction service may omit a key, return
/// `null`, or return a number where text was expected. Numbers and booleans
/// are kept as their textual rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawExtractedRecord {
    /// Bank named in the document header or logo.
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub bank_name_header: Option<String>,

    /// Transaction reference.
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    /// Execution or booking date, as printed.
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Payment amount.
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// Transaction charges or fees.
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub charges: Option<String>,

    /// Debited account identifier, as extracted.
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub sender_iban: Option<String>,

    /// Credited account identifier, as extracted.
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub recipient_iban: Option<String>,

    /// Name of the beneficiary.
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub beneficiary_name: Option<String>,

    /// Document-specific attributes, keyed by the label printed on the slip.
    #[serde(deserialize_with = "lenient_extras", skip_serializing_if = "Option::is_none")]
    pub dynamic_fields: Option<FieldMap>,

    /// Document-specific attributes under their alternative key.
    #[serde(deserialize_with = "lenient_extras", skip_serializing_if = "Option::is_none")]
    pub extra_fields: Option<FieldMap>,

    /// Top-level keys the record has no dedicated field for.
    #[serde(flatten)]
    pub unrecognized: FieldMap,
}

impl RawExtractedRecord {
    /// Parse the body of an extraction service response.
    ///
    /// The service answers either with a JSON object or with an array whose
    /// first element is the record. An empty array, or any other JSON value,
    /// yields an empty record.
    pub fn from_response(body: &str) -> Result<Self> {
        if body.trim().is_empty() {
            return Err(ResponseError::Empty.into());
        }

        let value: Value = serde_json::from_str(body)
            .map_err(|e| ResponseError::Malformed(e.to_string()))?;

        Self::from_value(value)
    }

    /// Build a record from an already-parsed response value.
    pub fn from_value(value: Value) -> Result<Self> {
        let object = match value {
            Value::Array(items) => items.into_iter().next().filter(Value::is_object),
            Value::Object(_) => Some(value),
            _ => None,
        };

        match object {
            Some(object) => Ok(serde_json::from_value(object)?),
            None => Ok(Self::default()),
        }
    }

    /// Every field beyond the fixed ones.
    ///
    /// Unrecognized top-level keys come first, then `dynamic_fields`, then
    /// `extra_fields`. A key seen earlier keeps its value.
    pub fn additional_fields(&self) -> FieldMap {
        let mut fields = self.unrecognized.clone();
        let groups = [self.dynamic_fields.as_ref(), self.extra_fields.as_ref()];

        for (key, value) in groups.into_iter().flatten().flat_map(|group| group.iter()) {
            if !fields.contains_key(key) {
                fields.insert(key, value);
            }
        }

        fields
    }
}

/// A raw record together with the name of the document it was extracted from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceRecord {
    /// Source document name (e.g. the scanned file name).
    pub source: Option<String>,
    /// Extracted fields.
    pub raw: RawExtractedRecord,
}

impl SourceRecord {
    pub fn new(source: impl Into<String>, raw: RawExtractedRecord) -> Self {
        Self {
            source: Some(source.into()),
            raw,
        }
    }
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_text))
}

fn lenient_extras<'de, D>(deserializer: D) -> std::result::Result<Option<FieldMap>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(value @ Value::Object(_)) => {
            FieldMap::deserialize(value).map(Some).map_err(serde::de::Error::custom)
        }
        _ => Ok(None),
    }
}
