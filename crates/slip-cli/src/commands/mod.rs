//! CLI subcommands.

pub mod banks;
pub mod batch;
pub mod config;
pub mod output;
pub mod process;

use std::path::{Path, PathBuf};

use tracing::debug;

use slip_core::models::config::SlipConfig;

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("slip")
        .join("config.json")
}

/// Configuration file named by `--config`, else the default location.
pub fn resolve_config_path(path: Option<&str>) -> PathBuf {
    path.map(PathBuf::from).unwrap_or_else(default_config_path)
}

/// Load configuration from `path`, else from the default location if a file
/// exists there, else defaults. A file named explicitly must exist.
pub fn load_config(path: Option<&str>) -> anyhow::Result<SlipConfig> {
    let file = resolve_config_path(path);

    if path.is_some() || file.exists() {
        debug!("Using configuration from {}", file.display());
        Ok(SlipConfig::from_file(&file)?)
    } else {
        Ok(SlipConfig::default())
    }
}

/// Name of the source document a response file belongs to.
///
/// `scan_01.pdf.json` and `scan_01.json` describe `scan_01.pdf` and
/// `scan_01` respectively.
pub fn source_name(path: &Path) -> String {
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    match name.len().checked_sub(5) {
        Some(cut) if name.is_char_boundary(cut) && name[cut..].eq_ignore_ascii_case(".json") => {
            name[..cut].to_string()
        }
        _ => name.to_string(),
    }
}
