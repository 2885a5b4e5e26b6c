//! Quirks — reversible patches to builtin behaviour, toggled by name.
//!
//! # Usage
//!
//! ```text
//! quirks [--enable NAME]... [--no-config] list [--json]
//! quirks sort KEY=VALUE...
//! quirks iter <N>
//! quirks slice <TEXT> [--start X] [--stop Y] [--step S]
//! quirks config show|enable <NAME>|disable <NAME>
//! ```
//!
//! Log verbosity is read from `QUIRKS_LOG` (default `warn`).

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use commands::{
    config::ConfigCommand, iter::IterArgs, list::ListArgs, slice::SliceArgs, sort::SortArgs,
};
use quirks_core::config;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "quirks",
    version,
    about = "Toggle reversible patches to builtin value behaviour",
    long_about = None,
)]
struct Cli {
    /// Enable an idea before running the command (repeatable).
    #[arg(long = "enable", short = 'e', value_name = "NAME", global = true)]
    enable: Vec<String>,

    /// Ignore ~/.quirks/config.yaml.
    #[arg(long, global = true)]
    no_config: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every idea with its state and the hooks it installs.
    List(ListArgs),

    /// Sort KEY=VALUE pairs by key (enables `dict_sort`).
    Sort(SortArgs),

    /// Iterate an integer (enables `iterable_int`).
    Iter(IterArgs),

    /// Slice text with half-character bounds (enables `float_slicing`).
    Slice(SliceArgs),

    /// Manage the ideas enabled at start-up.
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();
    activate_startup(&cli)?;

    match cli.command {
        Commands::List(args) => args.run(),
        Commands::Sort(args) => args.run(),
        Commands::Iter(args) => args.run(),
        Commands::Slice(args) => args.run(),
        Commands::Config { command } => commands::config::run(command),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_env("QUIRKS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Look up config-listed and `--enable` ideas so they activate before the
/// command runs.
fn activate_startup(cli: &Cli) -> Result<()> {
    let mut names = Vec::new();
    if !cli.no_config {
        let cfg = config::load_config().context("failed to load ~/.quirks/config.yaml")?;
        names.extend(cfg.enabled);
    }
    names.extend(cli.enable.iter().cloned());

    let registry = quirks_builtins::registry();
    tracing::debug!(count = names.len(), "activating start-up ideas");
    for name in &names {
        registry
            .get(name)
            .with_context(|| format!("cannot enable '{name}'"))?;
    }
    Ok(())
}
