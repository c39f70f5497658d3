//! Configuration service.
//!
//! Loads `config.toml` from the portal config directory, applies the
//! `PORTAL_BASE_URL` environment override and caches the result.

use std::sync::{Arc, RwLock};

use portal_core::config::PortalConfig;
use portal_core::error::Result;

use crate::paths::PortalPaths;
use crate::storage::AtomicTomlFile;

/// Environment variable overriding `base_url`.
pub const BASE_URL_ENV: &str = "PORTAL_BASE_URL";

/// Loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    paths: PortalPaths,
    config: Arc<RwLock<Option<PortalConfig>>>,
}

impl ConfigService {
    pub fn new(paths: PortalPaths) -> Self {
        Self {
            paths,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the configuration, reading the file on first access.
    ///
    /// A missing file yields the defaults. A malformed file is an error.
    pub fn get_config(&self) -> Result<PortalConfig> {
        {
            let cached = self.config.read().unwrap_or_else(|p| p.into_inner());
            if let Some(config) = cached.as_ref() {
                return Ok(config.clone());
            }
        }

        let loaded = self.load_config()?;
        let mut cached = self.config.write().unwrap_or_else(|p| p.into_inner());
        *cached = Some(loaded.clone());
        Ok(loaded)
    }

    /// Forces a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut cached = self.config.write().unwrap_or_else(|p| p.into_inner());
        *cached = None;
    }

    fn load_config(&self) -> Result<PortalConfig> {
        let file = AtomicTomlFile::<PortalConfig>::new(self.paths.config_file());
        let config = file.load()?.unwrap_or_default();
        let env_base_url = std::env::var(BASE_URL_ENV).ok();
        let config = apply_base_url_override(config, env_base_url.as_deref());
        tracing::debug!(
            "[ConfigService] Loaded config from {} (base_url={})",
            file.path().display(),
            config.base_url
        );
        Ok(config)
    }
}

/// Replaces `base_url` when the override is present and non-blank.
pub fn apply_base_url_override(config: PortalConfig, base_url: Option<&str>) -> PortalConfig {
    match base_url.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => config.with_base_url(url),
        None => config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::config::{DEFAULT_BASE_URL, DEFAULT_LOGIN_PATH};
    use tempfile::TempDir;

    #[test]
    fn test_override_ignores_blank() {
        let config = apply_base_url_override(PortalConfig::default(), Some("  "));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        let config = apply_base_url_override(PortalConfig::default(), Some("http://x:1"));
        assert_eq!(config.base_url, "http://x:1");
    }

    #[test]
    fn test_reads_file_and_caches() {
        let dir = TempDir::new().unwrap();
        let paths = PortalPaths::at(dir.path());
        std::fs::write(paths.config_file(), "login_path = \"/signin.html\"\n").unwrap();

        let service = ConfigService::new(paths.clone());
        let config = service.get_config().unwrap();
        assert_eq!(config.login_path, "/signin.html");

        std::fs::write(paths.config_file(), "").unwrap();
        assert_eq!(service.get_config().unwrap().login_path, "/signin.html");

        service.invalidate_cache();
        assert_eq!(service.get_config().unwrap().login_path, DEFAULT_LOGIN_PATH);
    }
}
