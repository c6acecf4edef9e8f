//! Solver configuration
//!
//! Stored as TOML. Lookup order for [`SolverConfig::discover`]:
//! an explicit path, then `$SHORTPATH_CONFIG_DIR/config.toml`, then
//! `<user config dir>/shortpath/config.toml`, then built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShortpathError};
use crate::graph::frontier::SelectorKind;
use crate::graph::weighted::RegistrationPolicy;

const CONFIG_DIR: &str = "shortpath";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "SHORTPATH_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Frontier implementation used by solves
    #[serde(default)]
    pub selector: SelectorKind,

    /// Require nodes to be registered before edges reference them
    #[serde(default = "default_strict_node_registration")]
    pub strict_node_registration: bool,
}

fn default_strict_node_registration() -> bool {
    true
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            selector: SelectorKind::default(),
            strict_node_registration: default_strict_node_registration(),
        }
    }
}

impl SolverConfig {
    pub fn registration_policy(&self) -> RegistrationPolicy {
        RegistrationPolicy::from_strict(self.strict_node_registration)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ShortpathError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: SolverConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), selector = %config.selector, "config_loaded");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ShortpathError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Default location of the user-level config file
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    ShortpathError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };
        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must exist. The default location is optional.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Ok(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}
