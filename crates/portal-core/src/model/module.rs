//! Module descriptors and localized labels.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// Module key of the landing page. It is always reachable, whatever the
/// user's module list says.
pub const DASHBOARD_KEY: &str = "dashboard";

/// A language → string map as sent by the server (`{"zh": "...", "en": "..."}`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    pub fn new(zh: impl Into<String>, en: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(Language::Zh.code().to_string(), zh.into());
        map.insert(Language::En.code().to_string(), en.into());
        Self(map)
    }

    /// Text for `lang`, falling back to the other language, then to "".
    pub fn get(&self, lang: Language) -> &str {
        self.0
            .get(lang.code())
            .or_else(|| self.0.get(lang.toggled().code()))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// A quick task offered by a module (e.g. `finance:expense`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDescriptor {
    pub id: String,
    #[serde(default)]
    pub label: LocalizedText,
}

/// A functional area with an access-controlled workbench page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    pub key: String,
    pub path: String,
    #[serde(default)]
    pub label: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default)]
    pub tasks: Vec<TaskDescriptor>,
}

impl ModuleDescriptor {
    pub fn new(key: impl Into<String>, path: impl Into<String>, label: LocalizedText) -> Self {
        Self {
            key: key.into(),
            path: path.into(),
            label,
            description: LocalizedText::default(),
            tasks: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: LocalizedText) -> Self {
        self.description = description;
        self
    }

    pub fn with_task(mut self, id: impl Into<String>, label: LocalizedText) -> Self {
        self.tasks.push(TaskDescriptor {
            id: id.into(),
            label,
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_text_fallback() {
        let both = LocalizedText::new("财务", "Finance");
        assert_eq!(both.get(Language::En), "Finance");

        let zh_only: LocalizedText = serde_json::from_str(r#"{"zh":"财务"}"#).unwrap();
        assert_eq!(zh_only.get(Language::En), "财务");

        assert_eq!(LocalizedText::default().get(Language::Zh), "");
    }

    #[test]
    fn test_descriptor_without_tasks_deserializes() {
        let json = r#"{"key":"office","path":"/office.html","label":{"zh":"办公","en":"Office"}}"#;
        let module: ModuleDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(module.key, "office");
        assert!(module.tasks.is_empty());
        assert_eq!(module.description.get(Language::En), "");
    }
}
