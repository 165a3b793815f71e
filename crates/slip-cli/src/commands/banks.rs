//! Banks command - inspect the sort code registry.

use clap::Args;
use console::style;

use slip_core::payment::rules::normalize_account_id;

/// Arguments for the banks command.
#[derive(Args)]
pub struct BanksArgs {
    /// Account identifier to resolve instead of listing the registry
    #[arg(long)]
    resolve: Option<String>,
}

pub fn run(args: BanksArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let registry = config.bank_registry();

    if let Some(raw) = args.resolve {
        let id = normalize_account_id(&raw);
        if id.is_empty() {
            anyhow::bail!("Not a domestic account identifier: {}", raw);
        }

        let bank = registry.resolve(&id);
        println!("{}", id);
        if bank.is_empty() {
            println!("{}", style("identifier too short to carry a sort code").yellow());
        } else {
            println!("{}", bank);
        }
        return Ok(());
    }

    for (code, name) in registry.entries() {
        println!("{}  {}", style(code).cyan(), name);
    }
    println!();
    println!("{} {} sort codes", style("ℹ").blue(), registry.len());

    Ok(())
}
