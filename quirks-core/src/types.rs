//! Domain types shared by the registry and the override state machine.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Lookup key of an override in the registry, e.g. `dict_sort`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OverrideName(pub String);

impl OverrideName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OverrideName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for OverrideName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for OverrideName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl Borrow<str> for OverrideName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Lifecycle state of an override.
///
/// ```text
///            enable            disable
/// Unknown ──────────► Enabled ─────────► Disabled
///                        ▲                  │
///                        └──────────────────┘
///                              enable
/// ```
///
/// Any apply/undo error moves the override to `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverrideState {
    /// Registered but never activated.
    #[default]
    Unknown,
    Enabled,
    Disabled,
    /// The last apply or undo reported an error. Only an explicit
    /// `enable`/`disable` moves it out of this state.
    Failed,
}

impl fmt::Display for OverrideState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverrideState::Unknown => write!(f, "unknown"),
            OverrideState::Enabled => write!(f, "enabled"),
            OverrideState::Disabled => write!(f, "disabled"),
            OverrideState::Failed => write!(f, "failed"),
        }
    }
}
