//! TOML-backed preference repository.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use portal_core::error::{PortalError, Result};
use portal_core::i18n::Language;
use portal_core::preferences::{PreferenceRepository, Preferences};
use tokio::sync::Mutex;

use crate::storage::AtomicTomlFile;

/// Preference repository persisted to `preferences.toml`.
///
/// The file is read once at construction; reads are then served from the
/// in-memory copy and every write goes through to disk.
#[derive(Clone)]
pub struct TomlPreferenceRepository {
    preferences: Arc<Mutex<Preferences>>,
    file: Arc<AtomicTomlFile<Preferences>>,
}

impl TomlPreferenceRepository {
    pub async fn new(path: PathBuf) -> Result<Self> {
        let file = Arc::new(AtomicTomlFile::<Preferences>::new(path));
        let loader = file.clone();
        let initial = tokio::task::spawn_blocking(move || loader.load())
            .await
            .map_err(|e| PortalError::internal(format!("Failed to join task: {e}")))??
            .unwrap_or_default();

        tracing::debug!(
            "[Preferences] Loaded {} (language={:?})",
            file.path().display(),
            initial.language
        );

        Ok(Self {
            preferences: Arc::new(Mutex::new(initial)),
            file,
        })
    }

    async fn modify<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Preferences) + Send + 'static,
    {
        let mut preferences = self.preferences.lock().await;
        let file = self.file.clone();
        let written = tokio::task::spawn_blocking(move || {
            file.update(Preferences::default(), |stored| {
                f(stored);
                Ok(())
            })
        })
        .await
        .map_err(|e| PortalError::internal(format!("Failed to join task: {e}")))??;
        *preferences = written;
        Ok(())
    }
}

#[async_trait]
impl PreferenceRepository for TomlPreferenceRepository {
    async fn get_preferences(&self) -> Result<Preferences> {
        Ok(self.preferences.lock().await.clone())
    }

    async fn save_preferences(&self, preferences: Preferences) -> Result<()> {
        self.modify(move |stored| *stored = preferences).await
    }

    async fn get_language(&self) -> Language {
        self.preferences.lock().await.language()
    }

    async fn set_language(&self, language: Language) -> Result<()> {
        tracing::info!("[Preferences] Language set to {}", language);
        self.modify(move |stored| stored.language = Some(language.code().to_string()))
            .await
    }

    async fn get_session_token(&self) -> Option<String> {
        self.preferences.lock().await.session_token.clone()
    }

    async fn set_session_token(&self, token: String) -> Result<()> {
        self.modify(move |stored| stored.session_token = Some(token)).await
    }

    async fn clear_session_token(&self) -> Result<()> {
        self.modify(|stored| stored.session_token = None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_defaults_without_file() {
        let dir = TempDir::new().unwrap();
        let repo = TomlPreferenceRepository::new(dir.path().join("preferences.toml"))
            .await
            .unwrap();
        assert_eq!(repo.get_language().await, Language::Zh);
        assert!(repo.get_session_token().await.is_none());
    }

    #[tokio::test]
    async fn test_hand_edited_invalid_language_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, "language = \"fr\"\n").unwrap();
        let repo = TomlPreferenceRepository::new(path).await.unwrap();
        assert_eq!(repo.get_language().await, Language::Zh);
        assert_eq!(
            repo.get_preferences().await.unwrap().language.as_deref(),
            Some("fr")
        );
    }
}
