//! `quirks config show|enable|disable`

use anyhow::{bail, Context, Result};
use clap::Subcommand;

use quirks_core::config;

/// Manage `~/.quirks/config.yaml`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the ideas enabled at start-up.
    Show,

    /// Enable an idea at every start-up.
    Enable {
        /// Idea name, e.g. "dict_sort".
        name: String,
    },

    /// Stop enabling an idea at start-up.
    Disable {
        /// Idea name, e.g. "dict_sort".
        name: String,
    },
}

pub fn run(cmd: ConfigCommand) -> Result<()> {
    let home = dirs::home_dir().context("could not determine home directory")?;
    let mut cfg = config::load_config_at(&home).context("failed to load config")?;

    match cmd {
        ConfigCommand::Show => {
            if cfg.enabled.is_empty() {
                println!("No ideas enabled at start-up.");
            }
            for name in &cfg.enabled {
                println!("{name}");
            }
            return Ok(());
        }
        ConfigCommand::Enable { name } => {
            if !quirks_builtins::registry().contains(&name) {
                bail!("unknown idea '{name}'; run `quirks list` to see them all");
            }
            if cfg.enabled.contains(&name) {
                println!("'{name}' is already enabled at start-up");
                return Ok(());
            }
            cfg.enabled.push(name.clone());
            println!("✓ '{name}' will be enabled at start-up");
        }
        ConfigCommand::Disable { name } => {
            let before = cfg.enabled.len();
            cfg.enabled.retain(|n| n != &name);
            if cfg.enabled.len() == before {
                println!("'{name}' was not enabled at start-up");
                return Ok(());
            }
            println!("✓ '{name}' will no longer be enabled at start-up");
        }
    }

    config::save_config_at(&home, &cfg)
        .with_context(|| format!("failed to save {}", config::config_path_at(&home).display()))?;
    Ok(())
}
