//! Module page bootstrap.
//!
//! ```text
//! Loading ──┬─> Redirecting                      (identity failed or 401)
//!           └─> Authorized ──┬─> Forbidden       (module not granted)
//!                            └─> Active          (session handed out)
//! ```

use std::sync::Arc;

use portal_core::error::{PortalError, Result};
use portal_core::gateway::PortalApi;
use portal_core::i18n::{Catalog, Language, ModuleCopy, TextKey};
use portal_core::model::{DASHBOARD_KEY, ModuleDescriptor, UserContext};
use portal_core::view::{NavigationView, module_header, navigation, user_info};

use crate::session::PortalSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapState {
    Loading,
    Redirecting,
    Authorized,
    Forbidden,
    Active,
}

/// Navigation, user line and module heading shared by every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageChrome {
    pub navigation: NavigationView,
    pub user_info: String,
    pub header: Option<ModuleCopy>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForbiddenPage {
    pub chrome: PageChrome,
    pub module_key: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ModulePage {
    pub chrome: PageChrome,
    pub session: PortalSession,
}

#[derive(Debug, Clone)]
pub enum BootstrapOutcome {
    /// Leave for the login page. `notice` is set when the failure was not a
    /// plain 401 and the user should be told something went wrong.
    Redirect {
        location: String,
        notice: Option<String>,
    },
    Forbidden(ForbiddenPage),
    Active(Box<ModulePage>),
}

impl BootstrapOutcome {
    pub fn state(&self) -> BootstrapState {
        match self {
            BootstrapOutcome::Redirect { .. } => BootstrapState::Redirecting,
            BootstrapOutcome::Forbidden(_) => BootstrapState::Forbidden,
            BootstrapOutcome::Active(_) => BootstrapState::Active,
        }
    }

    pub fn into_page(self) -> Option<ModulePage> {
        match self {
            BootstrapOutcome::Active(page) => Some(*page),
            _ => None,
        }
    }
}

/// Runs the page-load sequence for one module page.
pub struct BootstrapController {
    api: Arc<dyn PortalApi>,
    lang: Language,
    login_path: String,
    state: BootstrapState,
}

impl BootstrapController {
    pub fn new(api: Arc<dyn PortalApi>, lang: Language, login_path: impl Into<String>) -> Self {
        Self {
            api,
            lang,
            login_path: login_path.into(),
            state: BootstrapState::Loading,
        }
    }

    pub fn state(&self) -> BootstrapState {
        self.state
    }

    pub async fn load(&mut self, module_key: &str) -> BootstrapOutcome {
        self.state = BootstrapState::Loading;
        let catalog = Catalog::new(self.lang);
        tracing::debug!("[Bootstrap] Loading identity and modules for '{}'", module_key);

        let (identity, modules) = tokio::join!(self.api.me(), self.api.modules());

        let (user, modules) = match self.resolve(identity, modules) {
            Ok(loaded) => loaded,
            Err(err) => {
                let notice = (!err.is_unauthenticated()).then(|| catalog.text(TextKey::LoadError));
                let location = err
                    .redirect_target()
                    .unwrap_or(self.login_path.as_str())
                    .to_string();
                tracing::info!("[Bootstrap] Redirecting to {}: {}", location, err);
                self.state = BootstrapState::Redirecting;
                return BootstrapOutcome::Redirect { location, notice };
            }
        };

        self.state = BootstrapState::Authorized;
        let chrome = PageChrome {
            navigation: navigation(&modules, module_key, self.lang),
            user_info: user_info(&user),
            header: module_header(module_key, self.lang),
        };

        if !is_accessible(module_key, &user, &modules) {
            tracing::info!(
                "[Bootstrap] {} ({})",
                PortalError::forbidden(module_key),
                user.username
            );
            self.state = BootstrapState::Forbidden;
            return BootstrapOutcome::Forbidden(ForbiddenPage {
                chrome,
                module_key: module_key.to_string(),
                message: catalog.text(TextKey::NoPermission),
            });
        }

        tracing::info!(
            "[Bootstrap] '{}' active for {} ({} modules)",
            module_key,
            user.username,
            modules.len()
        );
        self.state = BootstrapState::Active;
        let session = PortalSession::new(
            self.api.clone(),
            user,
            modules,
            module_key.to_string(),
            self.lang,
        );
        BootstrapOutcome::Active(Box::new(ModulePage { chrome, session }))
    }

    /// Identity errors always win. A module-list error only matters when it
    /// is a 401; anything else degrades to an empty list.
    fn resolve(
        &self,
        identity: Result<UserContext>,
        modules: Result<Vec<ModuleDescriptor>>,
    ) -> Result<(UserContext, Vec<ModuleDescriptor>)> {
        let user = identity?;
        let modules = match modules {
            Ok(modules) => modules,
            Err(err @ PortalError::Unauthenticated { .. }) => return Err(err),
            Err(err) => {
                tracing::warn!("[Bootstrap] Module list unavailable: {}", err);
                Vec::new()
            }
        };
        Ok((user, modules))
    }
}

/// The dashboard is always reachable; other pages need a matching module
/// descriptor. When no descriptors could be loaded, the grants listed on the
/// identity decide.
pub fn is_accessible(module_key: &str, user: &UserContext, modules: &[ModuleDescriptor]) -> bool {
    if module_key == DASHBOARD_KEY {
        return true;
    }
    if modules.is_empty() {
        return user.modules.iter().any(|key| key == module_key);
    }
    modules.iter().any(|m| m.key == module_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::model::LocalizedText;

    #[test]
    fn test_access_check() {
        let modules = vec![ModuleDescriptor::new(
            "office",
            "/office.html",
            LocalizedText::new("办公", "Office"),
        )];
        let user = UserContext::new("alice").with_modules(["finance"]);
        assert!(is_accessible("office", &user, &modules));
        assert!(is_accessible("dashboard", &user, &modules));
        assert!(is_accessible("dashboard", &user, &[]));
        assert!(!is_accessible("finance", &user, &modules));
    }

    #[test]
    fn test_access_falls_back_to_identity_grants_without_descriptors() {
        let user = UserContext::new("alice").with_modules(["finance"]);
        assert!(is_accessible("finance", &user, &[]));
        assert!(!is_accessible("office", &user, &[]));
        assert!(!is_accessible("finance", &UserContext::new("bob"), &[]));
    }
}
