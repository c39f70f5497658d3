//! Dashboard module cards.

use crate::i18n::{Catalog, Language, TextKey};
use crate::model::ModuleDescriptor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleCard {
    pub key: String,
    pub title: String,
    pub description: String,
    pub href: String,
    pub call_to_action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModuleGridView {
    pub cards: Vec<ModuleCard>,
}

pub fn module_grid(modules: &[ModuleDescriptor], lang: Language) -> ModuleGridView {
    let cta = Catalog::new(lang).text(TextKey::CardCta);
    let cards = modules
        .iter()
        .map(|module| ModuleCard {
            key: module.key.clone(),
            title: module.label.get(lang).to_string(),
            description: module.description.get(lang).to_string(),
            href: module.path.clone(),
            call_to_action: cta.clone(),
        })
        .collect();
    ModuleGridView { cards }
}
