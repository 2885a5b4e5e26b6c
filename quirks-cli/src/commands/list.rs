//! `quirks list` — every idea, its state and its hooks.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use quirks_builtins::{ideas, BuiltinType};
use quirks_core::OverrideState;

/// Arguments for `quirks list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct IdeaJson {
    name: String,
    state: OverrideState,
    hooks: Vec<HookJson>,
    summary: &'static str,
}

#[derive(Serialize)]
struct HookJson {
    #[serde(rename = "type")]
    ty: BuiltinType,
    method: &'static str,
}

#[derive(Tabled)]
struct IdeaRow {
    #[tabled(rename = "idea")]
    name: String,
    #[tabled(rename = "state")]
    state: String,
    #[tabled(rename = "hooks")]
    hooks: String,
    #[tabled(rename = "summary")]
    summary: &'static str,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let registry = quirks_builtins::registry();
        let rows: Vec<IdeaJson> = registry
            .states()
            .into_iter()
            .map(|(name, state)| {
                let idea = ideas::find(name.as_str());
                IdeaJson {
                    hooks: idea
                        .map(|i| {
                            i.targets
                                .iter()
                                .map(|&(ty, method)| HookJson { ty, method })
                                .collect()
                        })
                        .unwrap_or_default(),
                    summary: idea.map_or("", |i| i.summary),
                    name: name.0,
                    state,
                }
            })
            .collect();

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&rows).context("failed to render idea list JSON")?
            );
            return Ok(());
        }

        let table_rows: Vec<IdeaRow> = rows
            .into_iter()
            .map(|row| IdeaRow {
                state: paint_state(row.state),
                hooks: row
                    .hooks
                    .iter()
                    .map(|h| format!("{}.{}", h.ty, h.method))
                    .collect::<Vec<_>>()
                    .join(", "),
                name: row.name,
                summary: row.summary,
            })
            .collect();

        let mut table = Table::new(table_rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}

fn paint_state(state: OverrideState) -> String {
    let label = state.to_string();
    match state {
        OverrideState::Enabled => label.green().to_string(),
        OverrideState::Disabled => label.yellow().to_string(),
        OverrideState::Failed => label.red().to_string(),
        OverrideState::Unknown => label.dimmed().to_string(),
    }
}
