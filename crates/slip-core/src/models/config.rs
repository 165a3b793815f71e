//! Configuration structures for the slip pipeline.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlipError};
use crate::payment::rules::banks::BankRegistry;
use crate::payment::MergePolicy;
use crate::report::labels::{DEFAULT_COLUMN_LABELS, DEFAULT_PRIORITY_COLUMNS};

/// Main configuration for the slip pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlipConfig {
    /// Report layout configuration.
    pub report: ReportConfig,

    /// Dynamic field merge configuration.
    pub merge: MergeConfig,

    /// Additional or overriding sort codes (code -> bank name).
    pub banks: BTreeMap<String, String>,
}

/// Report layout configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Preferred column order; unlisted columns follow in first-seen order.
    pub priority_columns: Vec<String>,

    /// Display header for canonical keys.
    pub column_labels: BTreeMap<String, String>,

    /// Rename canonical keys to their display headers.
    pub rename_columns: bool,

    /// Canonical keys rendered as amounts.
    pub amount_columns: Vec<String>,

    /// Currency suffix for amounts.
    pub currency_symbol: String,

    /// Default report file name.
    pub output_file_name: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            priority_columns: DEFAULT_PRIORITY_COLUMNS.iter().map(|s| s.to_string()).collect(),
            column_labels: DEFAULT_COLUMN_LABELS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            rename_columns: true,
            amount_columns: vec!["amount".to_string(), "charges".to_string()],
            currency_symbol: "€".to_string(),
            output_file_name: "payment_report.csv".to_string(),
        }
    }
}

/// Dynamic field merge configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Policy for extra fields whose key is already present.
    pub policy: MergePolicy,
}

impl SlipConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check the configuration for values the pipeline cannot use.
    pub fn validate(&self) -> Result<()> {
        for code in self.banks.keys() {
            if code.chars().count() != 4 || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(SlipError::Config(format!(
                    "sort code must be 4 alphanumeric characters: {:?}",
                    code
                )));
            }
        }

        let mut seen = HashSet::new();
        for label in &self.report.priority_columns {
            if !seen.insert(label.as_str()) {
                return Err(SlipError::Config(format!(
                    "duplicate priority column: {:?}",
                    label
                )));
            }
        }

        Ok(())
    }

    /// Domestic bank registry extended with the configured sort codes.
    pub fn bank_registry(&self) -> BankRegistry {
        BankRegistry::new().with_overrides(self.banks.clone())
    }
}
