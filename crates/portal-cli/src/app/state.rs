use std::sync::Arc;

use portal_core::config::PortalConfig;
use portal_core::gateway::PortalApi;
use portal_core::i18n::{Catalog, Language};
use portal_core::preferences::PreferenceRepository;
use portal_infrastructure::{HttpPortalGateway, TomlPreferenceRepository};

/// Services shared by every command.
pub struct AppState {
    pub config: PortalConfig,
    pub preferences: Arc<TomlPreferenceRepository>,
    pub gateway: Arc<HttpPortalGateway>,
}

impl AppState {
    pub fn api(&self) -> Arc<dyn PortalApi> {
        self.gateway.clone()
    }

    pub fn preference_repository(&self) -> Arc<dyn PreferenceRepository> {
        self.preferences.clone()
    }

    pub async fn language(&self) -> Language {
        self.preferences.get_language().await
    }

    pub async fn catalog(&self) -> Catalog {
        Catalog::new(self.language().await)
    }
}
