//! `quirks slice <TEXT> [--start X] [--stop Y] [--step S]`

use anyhow::{Context, Result};
use clap::Args;

use quirks_builtins::slice_str;

/// Arguments for `quirks slice`.
#[derive(Args, Debug)]
pub struct SliceArgs {
    /// Text to slice.
    pub text: String,

    /// Start bound; `.5` values split the first glyph.
    #[arg(long, allow_hyphen_values = true)]
    pub start: Option<f64>,

    /// Stop bound; `.5` values split the last glyph.
    #[arg(long, allow_hyphen_values = true)]
    pub stop: Option<f64>,

    /// Step; negative walks backwards.
    #[arg(long, allow_hyphen_values = true)]
    pub step: Option<i64>,
}

impl SliceArgs {
    pub fn run(self) -> Result<()> {
        quirks_builtins::registry().get("float_slicing")?;
        let out = slice_str(
            quirks_builtins::hooks(),
            &self.text,
            self.start,
            self.stop,
            self.step,
        )
        .with_context(|| format!("cannot slice '{}'", self.text))?;
        println!("{out}");
        Ok(())
    }
}
