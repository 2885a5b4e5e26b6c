//! # quirks-builtins
//!
//! The built-in ideas (`dict_sort`, `iterable_int`, `float_slicing`), the
//! [`HookTable`] they patch, and the capability functions that honour it.
//!
//! Call [`registry`] for the process-wide instance, or [`build_registry`]
//! for an isolated one:
//!
//! ```
//! let (registry, hooks) = quirks_builtins::build_registry().unwrap();
//! registry.get("iterable_int").unwrap();
//! let squares: Vec<i64> = quirks_builtins::iter_int(&hooks, 3).unwrap().map(|i| i * i).collect();
//! assert_eq!(squares, [0, 1, 4]);
//! ```

pub mod dict;
pub mod error;
pub mod hooks;
pub mod ideas;
pub mod int;
pub mod text;

use std::sync::{Arc, OnceLock};

use quirks_core::{OverrideError, OverrideRegistry};

pub use dict::{sort_dict, sort_dict_by_key};
pub use error::{BuiltinError, HookError};
pub use hooks::{BuiltinType, HookPayload, HookTable, HookTarget};
pub use ideas::{install, Idea, IDEAS};
pub use int::iter_int;
pub use text::{slice_str, split_glyph};

/// A fresh registry holding every idea, wired to its own hook table.
pub fn build_registry() -> Result<(OverrideRegistry, Arc<HookTable>), OverrideError> {
    let registry = OverrideRegistry::new();
    let hooks = Arc::new(HookTable::new());
    install(&registry, &hooks)?;
    Ok((registry, hooks))
}

struct Defaults {
    registry: OverrideRegistry,
    hooks: Arc<HookTable>,
}

static DEFAULTS: OnceLock<Defaults> = OnceLock::new();

fn defaults() -> &'static Defaults {
    DEFAULTS.get_or_init(|| {
        let registry = OverrideRegistry::new();
        let hooks = Arc::new(HookTable::new());
        // Only a duplicate key in IDEAS can fail here. The ideas registered
        // before it stay usable; the rest surface as UnknownName on lookup.
        if let Err(err) = install(&registry, &hooks) {
            tracing::error!(error = %err, "failed to register built-in ideas");
        }
        Defaults { registry, hooks }
    })
}

/// Process-wide registry, populated on first use. No idea is enabled until
/// it is looked up.
pub fn registry() -> &'static OverrideRegistry {
    &defaults().registry
}

/// Hook table backing [`registry`].
pub fn hooks() -> &'static HookTable {
    &defaults().hooks
}
