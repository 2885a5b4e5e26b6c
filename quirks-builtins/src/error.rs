//! Error types for quirks-builtins.

use thiserror::Error;

use crate::hooks::BuiltinType;

/// Hook table conflicts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HookError {
    /// Another override already owns this hook.
    #[error("{ty}.{method} is already hooked by '{owner}'")]
    AlreadyHooked {
        ty: BuiltinType,
        method: &'static str,
        owner: String,
    },

    /// Removal of a hook owned by a different override.
    #[error("{ty}.{method} is hooked by '{owner}', not '{requested_by}'")]
    NotOwner {
        ty: BuiltinType,
        method: &'static str,
        owner: String,
        requested_by: String,
    },

    /// Removal of a hook that is not installed.
    #[error("{ty}.{method} is not hooked")]
    NotHooked { ty: BuiltinType, method: &'static str },
}

/// Failures of the capability consumers. Each mirrors what the unpatched
/// builtin would report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuiltinError {
    #[error("'{ty}' object has no attribute '{method}'")]
    MissingMethod { ty: BuiltinType, method: &'static str },

    #[error("'{ty}' object is not iterable")]
    NotIterable { ty: BuiltinType },

    #[error("slice indices must be integers, got {value}")]
    NonIntegralIndex { value: f64 },

    #[error("slice step cannot be zero")]
    ZeroStep,
}
