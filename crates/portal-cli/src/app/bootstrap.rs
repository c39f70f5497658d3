use std::sync::Arc;

use anyhow::{Context, Result};
use portal_core::preferences::PreferenceRepository;
use portal_infrastructure::config_service::apply_base_url_override;
use portal_infrastructure::{ConfigService, HttpPortalGateway, PortalPaths, TomlPreferenceRepository};

use crate::app::AppState;

/// Wires configuration, stored preferences and the HTTP gateway.
///
/// `base_url` comes from `--base-url` and wins over both `config.toml` and
/// `PORTAL_BASE_URL`.
pub async fn bootstrap(paths: PortalPaths, base_url: Option<&str>) -> Result<AppState> {
    tracing::debug!("[Bootstrap] Config directory: {}", paths.root().display());

    let config_service = ConfigService::new(paths.clone());
    let config = apply_base_url_override(
        config_service
            .get_config()
            .context("Failed to load config.toml")?,
        base_url,
    );

    let preferences = Arc::new(
        TomlPreferenceRepository::new(paths.preferences_file())
            .await
            .context("Failed to load preferences.toml")?,
    );
    let session_token = preferences.get_session_token().await;
    tracing::info!(
        "[Bootstrap] Portal at {} ({})",
        config.base_url,
        if session_token.is_some() {
            "stored session"
        } else {
            "no session"
        }
    );

    let gateway = Arc::new(HttpPortalGateway::new(config.clone(), session_token));

    Ok(AppState {
        config,
        preferences,
        gateway,
    })
}
