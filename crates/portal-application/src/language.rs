//! Language preference.

use std::sync::Arc;

use portal_core::error::Result;
use portal_core::i18n::Language;
use portal_core::preferences::PreferenceRepository;

/// Reads and changes the persisted UI language.
///
/// A change takes effect on the next bootstrap; sessions already built keep
/// the language they were created with.
pub struct LanguageController {
    preferences: Arc<dyn PreferenceRepository>,
}

impl LanguageController {
    pub fn new(preferences: Arc<dyn PreferenceRepository>) -> Self {
        Self { preferences }
    }

    pub async fn current(&self) -> Language {
        self.preferences.get_language().await
    }

    /// Switches `zh` <-> `en` and persists the result.
    pub async fn toggle(&self) -> Result<Language> {
        let next = self.current().await.toggled();
        self.set(next).await?;
        Ok(next)
    }

    pub async fn set(&self, lang: Language) -> Result<()> {
        tracing::info!("[Language] Switching to {}", lang);
        self.preferences.set_language(lang).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::preferences::InMemoryPreferenceRepository;

    #[tokio::test]
    async fn test_toggle_round_trip() {
        let controller = LanguageController::new(Arc::new(InMemoryPreferenceRepository::new()));
        assert_eq!(controller.current().await, Language::Zh);
        assert_eq!(controller.toggle().await.unwrap(), Language::En);
        assert_eq!(controller.current().await, Language::En);
        assert_eq!(controller.toggle().await.unwrap(), Language::Zh);
    }
}
