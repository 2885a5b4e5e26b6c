//! Hook table: which builtin methods are currently patched, and by whom.
//!
//! Capability consumers (`dict`, `int`, `str` modules) consult the table at
//! the call site instead of the builtin being redefined.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;

use quirks_core::{ActivationPayload, PayloadError};

use crate::error::HookError;

/// The builtin value types a hook can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuiltinType {
    Dict,
    Int,
    Str,
}

impl fmt::Display for BuiltinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuiltinType::Dict => write!(f, "dict"),
            BuiltinType::Int => write!(f, "int"),
            BuiltinType::Str => write!(f, "str"),
        }
    }
}

/// A `(type, method)` pair, e.g. `(Dict, "sort")`.
pub type HookTarget = (BuiltinType, &'static str);

/// Thread-safe set of installed hooks, each tagged with its owner.
#[derive(Debug, Default)]
pub struct HookTable {
    installed: RwLock<BTreeMap<HookTarget, String>>,
}

impl HookTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a hook for `owner`. Re-installing one's own hook is a no-op;
    /// returns `true` only when the hook was newly added.
    pub fn install(
        &self,
        ty: BuiltinType,
        method: &'static str,
        owner: &str,
    ) -> Result<bool, HookError> {
        let mut installed = self.installed.write();
        match installed.get(&(ty, method)) {
            Some(current) if current == owner => Ok(false),
            Some(current) => Err(HookError::AlreadyHooked {
                ty,
                method,
                owner: current.clone(),
            }),
            None => {
                installed.insert((ty, method), owner.to_owned());
                tracing::debug!(%ty, method, owner, "hook installed");
                Ok(true)
            }
        }
    }

    /// Remove `owner`'s hook.
    pub fn remove(
        &self,
        ty: BuiltinType,
        method: &'static str,
        owner: &str,
    ) -> Result<(), HookError> {
        let mut installed = self.installed.write();
        match installed.get(&(ty, method)) {
            None => Err(HookError::NotHooked { ty, method }),
            Some(current) if current != owner => Err(HookError::NotOwner {
                ty,
                method,
                owner: current.clone(),
                requested_by: owner.to_owned(),
            }),
            Some(_) => {
                installed.remove(&(ty, method));
                tracing::debug!(%ty, method, owner, "hook removed");
                Ok(())
            }
        }
    }

    pub fn is_hooked(&self, ty: BuiltinType, method: &str) -> bool {
        self.installed
            .read()
            .keys()
            .any(|(t, m)| *t == ty && *m == method)
    }

    /// Owner of a hook, if installed.
    pub fn owner(&self, ty: BuiltinType, method: &str) -> Option<String> {
        self.installed
            .read()
            .iter()
            .find(|((t, m), _)| *t == ty && *m == method)
            .map(|(_, owner)| owner.clone())
    }

    /// Snapshot of installed hooks, sorted by target.
    pub fn hooked(&self) -> Vec<(HookTarget, String)> {
        self.installed
            .read()
            .iter()
            .map(|(target, owner)| (*target, owner.clone()))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// HookPayload
// ---------------------------------------------------------------------------

/// Payload shared by every built-in idea: install a fixed set of hooks on
/// apply, remove them on undo.
///
/// Apply is all-or-nothing: if one target conflicts, the targets this call
/// added are removed again before the error is returned.
pub struct HookPayload {
    owner: String,
    targets: &'static [HookTarget],
    table: Arc<HookTable>,
}

impl HookPayload {
    pub fn new(
        owner: impl Into<String>,
        targets: &'static [HookTarget],
        table: Arc<HookTable>,
    ) -> Self {
        Self {
            owner: owner.into(),
            targets,
            table,
        }
    }
}

impl ActivationPayload for HookPayload {
    fn apply(&self) -> Result<(), PayloadError> {
        let mut added = Vec::with_capacity(self.targets.len());
        for &(ty, method) in self.targets {
            match self.table.install(ty, method, &self.owner) {
                Ok(true) => added.push((ty, method)),
                Ok(false) => {}
                Err(err) => {
                    for &(ty, method) in added.iter().rev() {
                        if let Err(rollback) = self.table.remove(ty, method, &self.owner) {
                            tracing::warn!(%ty, method, error = %rollback, "rollback failed");
                        }
                    }
                    return Err(err.into());
                }
            }
        }
        Ok(())
    }

    /// Only hooks owned by this payload are removed. Targets that are gone,
    /// or held by another owner after a rolled-back apply, are skipped, so
    /// undo also cleans up after a failed apply.
    fn undo(&self) -> Result<(), PayloadError> {
        for &(ty, method) in self.targets {
            match self.table.remove(ty, method, &self.owner) {
                Ok(()) => {}
                Err(HookError::NotHooked { .. } | HookError::NotOwner { .. }) => {
                    tracing::debug!(%ty, method, owner = %self.owner, "hook not ours, skipped");
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }
}
