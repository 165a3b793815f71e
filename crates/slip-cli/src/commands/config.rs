//! Config command - inspect and edit the configuration file.
//!
//! Every subcommand works on the file named by `--config`, or on the default
//! location when none is given.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;

use slip_core::models::config::SlipConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write a configuration file with default values
    Init {
        /// Write here instead of the selected configuration file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print one value, addressed by a dotted key (e.g. "merge.policy")
    Get { key: String },

    /// Change one value; JSON literals are accepted, anything else is a string
    Set { key: String, value: String },

    /// Print the location of the configuration file
    Path,
}

/// The configuration file a command operates on.
struct ConfigFile<'a> {
    /// Value of `--config`, if given.
    requested: Option<&'a str>,
    path: PathBuf,
}

impl<'a> ConfigFile<'a> {
    fn new(requested: Option<&'a str>) -> Self {
        Self {
            requested,
            path: super::resolve_config_path(requested),
        }
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Current contents, or defaults while the file does not exist yet.
    fn load(&self) -> anyhow::Result<SlipConfig> {
        if self.exists() {
            super::load_config(self.requested)
        } else {
            Ok(SlipConfig::default())
        }
    }
}

pub fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let file = ConfigFile::new(config_path);

    match args.command {
        ConfigCommand::Show => {
            if !file.exists() {
                println!(
                    "{} {} does not exist, showing defaults.",
                    style("ℹ").blue(),
                    file.path.display()
                );
            }
            println!("{}", serde_json::to_string_pretty(&file.load()?)?);
        }
        ConfigCommand::Init { output, force } => {
            let target = output.unwrap_or_else(|| file.path.clone());
            init(&target, force)?;
        }
        ConfigCommand::Get { key } => {
            let json = serde_json::to_value(file.load()?)?;
            let value = lookup(&json, &key)
                .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        ConfigCommand::Set { key, value } => set(&file, &key, &value)?,
        ConfigCommand::Path => {
            let status = if file.exists() {
                style("exists").green()
            } else {
                style("not created").yellow()
            };
            println!("Configuration file: {}", file.path.display());
            println!("Status: {}", status);
        }
    }

    Ok(())
}

fn init(target: &Path, force: bool) -> anyhow::Result<()> {
    if target.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            target.display()
        );
    }

    write_config(target, &SlipConfig::default())?;
    println!(
        "{} Created configuration file at {}",
        style("✓").green(),
        target.display()
    );
    Ok(())
}

fn set(file: &ConfigFile<'_>, key: &str, raw: &str) -> anyhow::Result<()> {
    let value: Value =
        serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));

    let mut json = serde_json::to_value(file.load()?)?;
    assign(&mut json, key, value.clone())?;

    let config: SlipConfig = serde_json::from_value(json)?;
    config.validate()?;

    // Keys the configuration does not know are dropped by deserialization.
    let stored = serde_json::to_value(&config)?;
    if lookup(&stored, key) != Some(&value) {
        anyhow::bail!("Unknown configuration key or unsupported value: {}", key);
    }

    write_config(&file.path, &config)?;
    println!(
        "{} Set {} = {} in {}",
        style("✓").green(),
        key,
        serde_json::to_string(&value)?,
        file.path.display()
    );
    Ok(())
}

fn write_config(path: &Path, config: &SlipConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    config.save(path)?;
    Ok(())
}

/// JSON pointer for a dotted key.
fn pointer(key: &str) -> String {
    key.split('.')
        .map(|part| format!("/{}", part.replace('~', "~0").replace('/', "~1")))
        .collect()
}

fn lookup<'v>(root: &'v Value, key: &str) -> Option<&'v Value> {
    root.pointer(&pointer(key))
}

fn assign(root: &mut Value, key: &str, value: Value) -> anyhow::Result<()> {
    let (parent, last) = match key.rsplit_once('.') {
        Some((parent, last)) => (pointer(parent), last),
        None => (String::new(), key),
    };

    root.pointer_mut(&parent)
        .and_then(Value::as_object_mut)
        .ok_or_else(|| anyhow::anyhow!("Configuration path not found: {}", key))?
        .insert(last.to_string(), value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_dotted_key() {
        let root = json!({"merge": {"policy": "extra_wins"}, "banks": {"0140": "ALPHA"}});

        assert_eq!(lookup(&root, "merge.policy"), Some(&json!("extra_wins")));
        assert_eq!(lookup(&root, "banks.0140"), Some(&json!("ALPHA")));
        assert_eq!(lookup(&root, "merge.missing"), None);
    }

    #[test]
    fn test_assign_dotted_key() {
        let mut root = json!({"merge": {"policy": "preserve_canonical"}, "banks": {}});

        assign(&mut root, "merge.policy", json!("extra_wins")).unwrap();
        assign(&mut root, "banks.0999", json!("TEST BANK")).unwrap();

        assert_eq!(root["merge"]["policy"], "extra_wins");
        assert_eq!(root["banks"]["0999"], "TEST BANK");
        assert!(assign(&mut root, "merge.policy.deeper", json!(1)).is_err());
        assert!(assign(&mut root, "nowhere.key", json!(1)).is_err());
    }
}
