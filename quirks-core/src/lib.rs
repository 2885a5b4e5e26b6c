//! Quirks core library: a registry of named, reversible behaviour overrides.
//!
//! Public API surface:
//! - [`name`] — [`derive_name`], `DictSort` → `dict_sort`
//! - [`types`] — [`OverrideName`], [`OverrideState`]
//! - [`payload`] — [`ActivationPayload`] and the closure-backed [`FnPayload`]
//! - [`lifecycle`] — [`Override`], the enable/disable state machine
//! - [`registry`] — [`OverrideRegistry`], lazy activation on lookup
//! - [`config`] — `~/.quirks/config.yaml` load / save
//! - [`error`] — [`OverrideError`], [`ConfigError`]

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod name;
pub mod payload;
pub mod registry;
pub mod types;

pub use config::QuirksConfig;
pub use error::{ConfigError, OverrideError, Phase};
pub use lifecycle::Override;
pub use name::derive_name;
pub use payload::{ActivationPayload, FnPayload, PayloadError};
pub use registry::OverrideRegistry;
pub use types::{OverrideName, OverrideState};
