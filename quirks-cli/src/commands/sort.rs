//! `quirks sort KEY=VALUE...`

use anyhow::{bail, Context, Result};
use clap::Args;
use indexmap::IndexMap;

use quirks_builtins::sort_dict;

/// Arguments for `quirks sort`.
#[derive(Args, Debug)]
pub struct SortArgs {
    /// Entries as KEY=VALUE, in insertion order.
    #[arg(required = true, value_name = "KEY=VALUE")]
    pub entries: Vec<String>,
}

impl SortArgs {
    pub fn run(self) -> Result<()> {
        let mut map = IndexMap::new();
        for entry in &self.entries {
            let Some((key, value)) = entry.split_once('=') else {
                bail!("expected KEY=VALUE, got '{entry}'");
            };
            map.insert(key.to_owned(), value.to_owned());
        }

        quirks_builtins::registry().get("dict_sort")?;
        sort_dict(quirks_builtins::hooks(), &mut map).context("dict.sort failed")?;

        for (key, value) in &map {
            println!("{key}={value}");
        }
        Ok(())
    }
}
