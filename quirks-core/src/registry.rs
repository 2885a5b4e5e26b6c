//! Name → override table with lazy activation on lookup.
//!
//! # Lifecycle
//!
//! ```text
//! register(name, payload)   state = Unknown, no side effect
//! get(name)                 Unknown → enable() once, then handle
//! get(name) again           handle only, never re-activates
//! ```
//!
//! Entries are never removed; only their state changes. The map sits behind
//! a readers-writer lock: `register` takes it exclusively, lookups share it.
//! Activation itself runs under the override's own lock, after the map lock
//! has been released.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::error::OverrideError;
use crate::lifecycle::Override;
use crate::name::derive_name;
use crate::payload::ActivationPayload;
use crate::types::{OverrideName, OverrideState};

/// Process-lifetime table of overrides, in registration order.
#[derive(Debug, Default)]
pub struct OverrideRegistry {
    entries: RwLock<IndexMap<OverrideName, Arc<Override>>>,
}

impl OverrideRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Registration
    // -----------------------------------------------------------------------

    /// Register `payload` under `name`, in the `Unknown` state.
    ///
    /// Fails with [`OverrideError::DuplicateName`] if the name is taken; the
    /// existing entry is left untouched.
    pub fn register(
        &self,
        name: impl Into<OverrideName>,
        payload: impl ActivationPayload + 'static,
    ) -> Result<Arc<Override>, OverrideError> {
        let name = name.into();
        let mut entries = self.entries.write();
        if entries.contains_key(&name) {
            return Err(OverrideError::DuplicateName { name });
        }
        let handle = Arc::new(Override::new(name.clone(), payload));
        entries.insert(name.clone(), handle.clone());
        tracing::debug!(name = %name, "override registered");
        Ok(handle)
    }

    /// Register under the key derived from a CamelCase type name
    /// (`DictSort` → `dict_sort`).
    pub fn register_type(
        &self,
        type_name: &str,
        payload: impl ActivationPayload + 'static,
    ) -> Result<Arc<Override>, OverrideError> {
        self.register(derive_name(type_name), payload)
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Look up an override, enabling it if it has never been activated.
    ///
    /// An override already `Enabled`, `Disabled` or `Failed` is returned as
    /// is. If the lazy activation itself fails, the error is returned and the
    /// override stays `Failed`; later lookups hand it back without retrying.
    pub fn get(&self, name: &str) -> Result<Arc<Override>, OverrideError> {
        let handle = self.peek(name)?;
        if handle.activate_if_unknown()? {
            tracing::debug!(name = %name, "lazily activated on first lookup");
        }
        Ok(handle)
    }

    /// Look up an override without any activation.
    pub fn peek(&self, name: &str) -> Result<Arc<Override>, OverrideError> {
        self.entries
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| OverrideError::UnknownName { name: name.into() })
    }

    /// Disable the named override. Never triggers lazy activation.
    pub fn disable(&self, name: &str) -> Result<(), OverrideError> {
        self.peek(name)?.disable()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Snapshot of all registered names, in registration order.
    pub fn list_names(&self) -> Vec<OverrideName> {
        self.entries.read().keys().cloned().collect()
    }

    /// Snapshot of `(name, state)` pairs, in registration order.
    pub fn states(&self) -> Vec<(OverrideName, OverrideState)> {
        self.entries
            .read()
            .iter()
            .map(|(name, ov)| (name.clone(), ov.state()))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::{FnPayload, PayloadError};

    fn noop() -> FnPayload<
        impl Fn() -> Result<(), PayloadError> + Send + Sync,
        impl Fn() -> Result<(), PayloadError> + Send + Sync,
    > {
        FnPayload::new(|| Ok(()), || Ok(()))
    }

    #[test]
    fn register_type_derives_key() {
        let registry = OverrideRegistry::new();
        let ov = registry.register_type("DictSort", noop()).expect("register");
        assert_eq!(ov.name().as_str(), "dict_sort");
        assert!(registry.contains("dict_sort"));
    }

    #[test]
    fn peek_does_not_activate() {
        let registry = OverrideRegistry::new();
        registry.register("quiet", noop()).expect("register");
        let ov = registry.peek("quiet").expect("peek");
        assert_eq!(ov.state(), OverrideState::Unknown);
    }

    #[test]
    fn disable_unknown_name_errors() {
        let registry = OverrideRegistry::new();
        let err = registry.disable("ghost").unwrap_err();
        assert!(matches!(err, OverrideError::UnknownName { .. }));
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn empty_registry() {
        let registry = OverrideRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.list_names().is_empty());
    }
}
