//! `quirks iter <N>`

use anyhow::{Context, Result};
use clap::Args;

use quirks_builtins::iter_int;

/// Arguments for `quirks iter`.
#[derive(Args, Debug)]
pub struct IterArgs {
    /// The integer to iterate.
    #[arg(allow_hyphen_values = true)]
    pub n: i64,
}

impl IterArgs {
    pub fn run(self) -> Result<()> {
        quirks_builtins::registry().get("iterable_int")?;
        let items = iter_int(quirks_builtins::hooks(), self.n)
            .with_context(|| format!("cannot iterate {}", self.n))?;
        for i in items {
            println!("{i}");
        }
        Ok(())
    }
}
