//! Login and logout.
//!
//! The login page is public, so this controller works without a session.

use std::sync::Arc;

use portal_core::config::PortalConfig;
use portal_core::error::Result;
use portal_core::gateway::PortalApi;
use portal_core::i18n::{Catalog, TextKey};
use portal_core::model::Credentials;
use portal_core::preferences::PreferenceRepository;

use crate::in_flight::InFlight;
use crate::update::ViewUpdate;

/// Result of a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedIn {
    pub status: String,
    /// Where to go next (the dashboard).
    pub location: String,
    pub modules: Vec<String>,
}

pub struct AuthController {
    api: Arc<dyn PortalApi>,
    preferences: Arc<dyn PreferenceRepository>,
    config: PortalConfig,
    catalog: Catalog,
    login_control: InFlight,
}

impl AuthController {
    pub fn new(
        api: Arc<dyn PortalApi>,
        preferences: Arc<dyn PreferenceRepository>,
        config: PortalConfig,
        catalog: Catalog,
    ) -> Self {
        Self {
            api,
            preferences,
            config,
            catalog,
            login_control: InFlight::new(),
        }
    }

    /// Status shown while the login request is pending.
    pub fn signing_in(&self) -> String {
        self.catalog.text(TextKey::SigningIn)
    }

    /// Signs in and stores the issued session. Any failure shows the
    /// generic `login_failed` text.
    pub async fn login(&self, username: &str, password: &str) -> ViewUpdate<SignedIn> {
        let Some(_guard) = self.login_control.try_acquire() else {
            return ViewUpdate::rejected(self.signing_in());
        };

        let credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = match self.api.login(&credentials).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!("[Auth] Login failed for {}: {}", username, err);
                return ViewUpdate::Failed {
                    status: self.catalog.text(TextKey::LoginFailed),
                };
            }
        };

        if let Some(token) = response.session_token.clone()
            && let Err(err) = self.preferences.set_session_token(token).await
        {
            tracing::error!("[Auth] Failed to store session: {}", err);
            return ViewUpdate::Failed {
                status: err.to_string(),
            };
        }

        tracing::info!("[Auth] Signed in as {}", username);
        ViewUpdate::Show(SignedIn {
            status: self.catalog.text(TextKey::LoginSuccess),
            location: self.config.dashboard_path.clone(),
            modules: response.modules,
        })
    }

    /// Ends the session and returns the login page location.
    ///
    /// The stored session is cleared even when the server call fails; the
    /// server error is still returned. A 401 means the session had already
    /// ended and counts as signed out.
    pub async fn logout(&self) -> Result<String> {
        let remote = self.api.logout().await;
        self.preferences.clear_session_token().await?;
        match remote {
            Ok(()) => {
                tracing::info!("[Auth] Signed out");
                Ok(self.config.login_path.clone())
            }
            Err(err) if err.is_unauthenticated() => Ok(self.config.login_path.clone()),
            Err(err) => {
                tracing::warn!("[Auth] Logout request failed: {}", err);
                Err(err)
            }
        }
    }
}
