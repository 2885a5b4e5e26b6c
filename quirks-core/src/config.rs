//! Start-up configuration.
//!
//! # Storage layout
//!
//! ```text
//! ~/.quirks/
//!   config.yaml   (mode 0600)
//! ```
//!
//! ```yaml
//! enabled:
//!   - dict_sort
//!   - float_slicing
//! ```
//!
//! Every function has an explicit-home `_at` form used by tests and a
//! convenience form that derives home from `dirs::home_dir()`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Contents of `config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuirksConfig {
    /// Overrides to look up (and so lazily enable) at start-up.
    #[serde(default)]
    pub enabled: Vec<String>,
}

/// `<home>/.quirks/config.yaml` — pure, no I/O.
pub fn config_path_at(home: &Path) -> PathBuf {
    home.join(".quirks").join("config.yaml")
}

/// Load the config. A missing file is not an error and yields the default.
pub fn load_config_at(home: &Path) -> Result<QuirksConfig, ConfigError> {
    let path = config_path_at(home);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(QuirksConfig::default());
    }
    let contents = std::fs::read_to_string(&path)?;
    if contents.trim().is_empty() {
        return Ok(QuirksConfig::default());
    }
    serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse { path, source: e })
}

/// `load_config_at` convenience wrapper.
pub fn load_config() -> Result<QuirksConfig, ConfigError> {
    load_config_at(&home()?)
}

/// Atomically write the config: `.yaml.tmp` sibling → `chmod 0600` → `rename`.
pub fn save_config_at(home: &Path, config: &QuirksConfig) -> Result<(), ConfigError> {
    let path = config_path_at(home);
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let tmp_path = path.with_file_name("config.yaml.tmp");

    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(&tmp_path, yaml)?;
    set_file_permissions(&tmp_path)?;
    std::fs::rename(&tmp_path, &path)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn home() -> Result<PathBuf, ConfigError> {
    dirs::home_dir().ok_or(ConfigError::HomeNotFound)
}

#[cfg(unix)]
fn set_file_permissions(path: &Path) -> Result<(), ConfigError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    Ok(())
}
#[cfg(not(unix))]
fn set_file_permissions(_path: &Path) -> Result<(), ConfigError> {
    Ok(())
}
