//! Feature coverage map.

use crate::i18n::{Catalog, Language};
use crate::model::{FeatureArea, FeatureStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRow {
    pub name: String,
    pub status: FeatureStatus,
    /// Badge text; empty for statuses the client does not know.
    pub badge: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureGroup {
    pub title: String,
    pub rows: Vec<FeatureRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeatureMapView {
    pub groups: Vec<FeatureGroup>,
}

pub fn feature_map(areas: &[FeatureArea], lang: Language) -> FeatureMapView {
    let catalog = Catalog::new(lang);
    let groups = areas
        .iter()
        .map(|area| FeatureGroup {
            title: area.title.get(lang).to_string(),
            rows: area
                .items
                .iter()
                .map(|item| FeatureRow {
                    name: item.name.get(lang).to_string(),
                    status: item.status,
                    badge: item
                        .status
                        .text_key()
                        .map(|key| catalog.text(key))
                        .unwrap_or_default(),
                })
                .collect(),
        })
        .collect();
    FeatureMapView { groups }
}
