//! Top navigation bar.

use crate::i18n::{Catalog, Language, TextKey};
use crate::model::ModuleDescriptor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub key: String,
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// One link per accessible module, followed by the language toggle and
/// logout controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationView {
    pub links: Vec<NavLink>,
    pub language_toggle: String,
    pub logout: String,
}

impl NavigationView {
    pub fn active(&self) -> Option<&NavLink> {
        self.links.iter().find(|link| link.active)
    }
}

pub fn navigation(modules: &[ModuleDescriptor], active_key: &str, lang: Language) -> NavigationView {
    let catalog = Catalog::new(lang);
    let links = modules
        .iter()
        .map(|module| NavLink {
            key: module.key.clone(),
            label: module.label.get(lang).to_string(),
            href: module.path.clone(),
            active: module.key == active_key,
        })
        .collect();

    NavigationView {
        links,
        language_toggle: catalog.text(TextKey::LanguageToggle),
        logout: catalog.text(TextKey::NavLogout),
    }
}
