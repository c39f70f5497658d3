//! Feature coverage map served by `/api/features`.

use serde::{Deserialize, Serialize};

use super::module::LocalizedText;
use crate::i18n::TextKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureStatus {
    Ready,
    InProgress,
    Planned,
    #[serde(other)]
    Unknown,
}

impl FeatureStatus {
    /// String table key of the badge text (`status_<status>`).
    pub fn text_key(self) -> Option<TextKey> {
        match self {
            FeatureStatus::Ready => Some(TextKey::StatusReady),
            FeatureStatus::InProgress => Some(TextKey::StatusInProgress),
            FeatureStatus::Planned => Some(TextKey::StatusPlanned),
            FeatureStatus::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureItem {
    pub name: LocalizedText,
    pub status: FeatureStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureArea {
    pub title: LocalizedText,
    #[serde(default)]
    pub items: Vec<FeatureItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_is_tolerated() {
        let json = r#"{"title":{"en":"HR"},"items":[{"name":{"en":"Payroll"},"status":"retired"},{"name":{"en":"Leave"},"status":"in_progress"}]}"#;
        let area: FeatureArea = serde_json::from_str(json).unwrap();
        assert_eq!(area.items[0].status, FeatureStatus::Unknown);
        assert_eq!(area.items[1].status, FeatureStatus::InProgress);
        assert_eq!(area.items[1].status.text_key(), Some(TextKey::StatusInProgress));
    }
}
