//! Error types for quirks-core.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::payload::PayloadError;
use crate::types::OverrideName;

/// Which half of a payload was running when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Apply,
    Undo,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Apply => write!(f, "apply"),
            Phase::Undo => write!(f, "undo"),
        }
    }
}

/// All errors that can arise from registry and override operations.
#[derive(Debug, Error)]
pub enum OverrideError {
    /// `register` was called with a name that is already taken.
    #[error("override '{name}' is already registered")]
    DuplicateName { name: OverrideName },

    /// Lookup of a name that was never registered.
    #[error("no override named '{name}'")]
    UnknownName { name: OverrideName },

    /// The payload's apply or undo routine reported an error.
    /// The override is left in [`OverrideState::Failed`](crate::OverrideState::Failed).
    #[error("override '{name}' failed during {phase}: {source}")]
    ActivationFailure {
        name: OverrideName,
        phase: Phase,
        #[source]
        source: PayloadError,
    },
}

/// Errors from loading or saving `~/.quirks/config.yaml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading, writing or renaming the config file failed.
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The enabled-ideas list could not be encoded on save.
    #[error("cannot encode config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// `config.yaml` exists but is not a valid `enabled:` list.
    #[error("invalid quirks config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// No home directory to look for `.quirks/` in.
    #[error("no home directory for .quirks/config.yaml; set $HOME")]
    HomeNotFound,
}
