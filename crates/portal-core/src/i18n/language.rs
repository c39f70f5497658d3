//! Display language selection.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Languages the portal UI is translated into.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    Zh,
    En,
}

impl Language {
    /// Resolves a stored preference into an effective language.
    ///
    /// Only the exact code `en` selects English; unset, unknown or
    /// malformed values fall back to `zh`.
    pub fn resolve(stored: Option<&str>) -> Self {
        match stored {
            Some("en") => Language::En,
            _ => Language::Zh,
        }
    }

    /// The language the toggle button switches to.
    pub fn toggled(self) -> Self {
        match self {
            Language::Zh => Language::En,
            Language::En => Language::Zh,
        }
    }

    /// Two-letter code as persisted in preferences.
    pub fn code(self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults_to_zh() {
        assert_eq!(Language::resolve(None), Language::Zh);
        assert_eq!(Language::resolve(Some("")), Language::Zh);
        assert_eq!(Language::resolve(Some("fr")), Language::Zh);
        assert_eq!(Language::resolve(Some("EN")), Language::Zh);
        assert_eq!(Language::resolve(Some("zh")), Language::Zh);
    }

    #[test]
    fn test_resolve_en() {
        assert_eq!(Language::resolve(Some("en")), Language::En);
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Language::Zh.toggled(), Language::En);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }

    #[test]
    fn test_code_matches_strum() {
        assert_eq!(Language::En.code(), Language::En.as_ref());
        assert_eq!("zh".parse::<Language>().unwrap(), Language::Zh);
    }
}
