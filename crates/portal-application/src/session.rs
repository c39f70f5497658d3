//! Session context for one bootstrap.
//!
//! A [`PortalSession`] is only produced by a bootstrap that reached the
//! active state, and every workbench is bound from one. Identity and module
//! data inside it are a snapshot: they are never refreshed, a new bootstrap
//! builds a new session.

use std::sync::Arc;

use portal_core::gateway::PortalApi;
use portal_core::i18n::{Catalog, Language};
use portal_core::model::{ModuleDescriptor, TaskDescriptor, UserContext};

#[derive(Clone)]
pub struct PortalSession {
    api: Arc<dyn PortalApi>,
    user: UserContext,
    modules: Vec<ModuleDescriptor>,
    module_key: String,
    lang: Language,
}

impl PortalSession {
    pub(crate) fn new(
        api: Arc<dyn PortalApi>,
        user: UserContext,
        modules: Vec<ModuleDescriptor>,
        module_key: String,
        lang: Language,
    ) -> Self {
        Self {
            api,
            user,
            modules,
            module_key,
            lang,
        }
    }

    pub fn api(&self) -> Arc<dyn PortalApi> {
        self.api.clone()
    }

    pub fn user(&self) -> &UserContext {
        &self.user
    }

    pub fn modules(&self) -> &[ModuleDescriptor] {
        &self.modules
    }

    /// Key of the page this session was bootstrapped for.
    pub fn module_key(&self) -> &str {
        &self.module_key
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.lang)
    }

    pub fn module(&self, key: &str) -> Option<&ModuleDescriptor> {
        self.modules.iter().find(|m| m.key == key)
    }

    /// Quick tasks of one module; empty for unknown modules.
    pub fn tasks(&self, key: &str) -> &[TaskDescriptor] {
        self.module(key).map(|m| m.tasks.as_slice()).unwrap_or(&[])
    }

    /// Tasks of every accessible module, in module order.
    pub fn all_tasks(&self) -> impl Iterator<Item = &TaskDescriptor> {
        self.modules.iter().flat_map(|m| m.tasks.iter())
    }
}

impl std::fmt::Debug for PortalSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortalSession")
            .field("user", &self.user.username)
            .field("module_key", &self.module_key)
            .field("modules", &self.modules.len())
            .field("lang", &self.lang)
            .finish()
    }
}
