//! Wrapper configuration: which package manager to drive, the command
//! vocabulary it understands, and the shortcut table.
//!
//! The config file is TOML with camelCase keys. The default location can
//! be redirected per invocation through the `PAK_MGR_OVERRIDE` environment
//! variable, which selects a named config under `/etc/pak.d/`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default config file location.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/pak.cfg";

/// Directory holding named override configs (`<name>.cfg`).
pub const OVERRIDE_DIR: &str = "/etc/pak.d";

/// Environment variable selecting a named override config.
pub const OVERRIDE_ENV_VAR: &str = "PAK_MGR_OVERRIDE";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Executable name of the underlying package manager.
    pub package_manager: String,
    /// Command vocabulary; order defines tie-break priority.
    pub commands: Vec<String>,
    /// Whether to prefix invocations with the root command.
    pub use_root: bool,
    /// Command used to invoke root (e.g. sudo or doas).
    pub root_command: String,
    /// User-facing aliases, index-aligned with `shortcut_mappings`.
    #[serde(default)]
    pub shortcuts: Vec<String>,
    /// Canonical command each shortcut maps to.
    #[serde(default)]
    pub shortcut_mappings: Vec<String>,
}

/// A config plus where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// True when the file was selected via [`OVERRIDE_ENV_VAR`].
    pub overridden: bool,
}

/// Resolve the config file path, honoring the override environment variable.
pub fn config_path() -> (PathBuf, bool) {
    match std::env::var(OVERRIDE_ENV_VAR) {
        Ok(name) if !name.is_empty() => {
            let path = Path::new(OVERRIDE_DIR).join(format!("{}.cfg", name));
            (path, true)
        }
        _ => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
    }
}

/// Load the config from the default chain (override variable, then default path).
pub fn load() -> Result<LoadedConfig> {
    let (path, overridden) = config_path();
    let config = load_from(&path)?;
    Ok(LoadedConfig { config, overridden })
}

/// Load and validate a config from an explicit path.
pub fn load_from(path: &Path) -> Result<Config> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&raw)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.package_manager.is_empty() {
        return Err(Error::Config("packageManager must not be empty".to_string()));
    }

    if config.commands.is_empty() {
        return Err(Error::Config("commands must not be empty".to_string()));
    }

    if config.shortcuts.len() != config.shortcut_mappings.len() {
        return Err(Error::Config(format!(
            "shortcuts ({}) and shortcutMappings ({}) must have the same length",
            config.shortcuts.len(),
            config.shortcut_mappings.len()
        )));
    }

    Ok(())
}
