//! Path management for portal client files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/portal/            # Config directory (or $PORTAL_CONFIG_DIR)
//! ├── config.toml              # Client configuration
//! ├── preferences.toml         # Language and session token
//! └── logs/                    # Application logs
//!     └── portal.log.YYYY-MM-DD
//! ```

use std::path::{Path, PathBuf};

use portal_core::error::{PortalError, Result};

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "PORTAL_CONFIG_DIR";

const APP_DIR_NAME: &str = "portal";

/// Files and directories owned by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    Config,
    Preferences,
    Logs,
}

/// Resolved location of the portal config directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalPaths {
    root: PathBuf,
}

impl PortalPaths {
    /// Resolves the config directory.
    ///
    /// Priority: `explicit` > `$PORTAL_CONFIG_DIR` > platform config dir.
    pub fn new(explicit: Option<PathBuf>) -> Result<Self> {
        let from_env = std::env::var_os(CONFIG_DIR_ENV).map(PathBuf::from);
        Self::resolve(explicit, from_env, dirs::config_dir())
    }

    /// Uses `root` as-is.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(
        explicit: Option<PathBuf>,
        from_env: Option<PathBuf>,
        platform: Option<PathBuf>,
    ) -> Result<Self> {
        if let Some(root) = explicit.or(from_env).filter(|p| !p.as_os_str().is_empty()) {
            return Ok(Self { root });
        }
        platform
            .map(|dir| Self {
                root: dir.join(APP_DIR_NAME),
            })
            .ok_or_else(|| PortalError::config("Cannot find a config directory"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn get_path(&self, service: ServiceType) -> PathBuf {
        match service {
            ServiceType::Config => self.root.join("config.toml"),
            ServiceType::Preferences => self.root.join("preferences.toml"),
            ServiceType::Logs => self.root.join("logs"),
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.get_path(ServiceType::Config)
    }

    pub fn preferences_file(&self) -> PathBuf {
        self.get_path(ServiceType::Preferences)
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.get_path(ServiceType::Logs)
    }
}
