//! Client-side persisted preferences.
//!
//! Two values survive between runs: the UI language and the session cookie
//! issued by `/api/login`.

use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::i18n::Language;

/// Persisted preference record.
///
/// `language` is stored raw so that an invalid value written by hand is
/// kept as-is and simply resolves to the default language.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective language (`zh` unless the stored value is exactly `en`).
    pub fn language(&self) -> Language {
        Language::resolve(self.language.as_deref())
    }
}

/// Repository for managing persisted preferences.
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    async fn get_preferences(&self) -> Result<Preferences>;

    /// Saves the preferences to storage.
    async fn save_preferences(&self, preferences: Preferences) -> Result<()>;

    async fn get_language(&self) -> Language;

    async fn set_language(&self, language: Language) -> Result<()>;

    async fn get_session_token(&self) -> Option<String>;

    async fn set_session_token(&self, token: String) -> Result<()>;

    async fn clear_session_token(&self) -> Result<()>;
}

/// Non-persistent implementation, for tests and one-off runs.
#[derive(Debug, Default)]
pub struct InMemoryPreferenceRepository {
    preferences: Mutex<Preferences>,
}

impl InMemoryPreferenceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preferences(preferences: Preferences) -> Self {
        Self {
            preferences: Mutex::new(preferences),
        }
    }

    fn snapshot(&self) -> Preferences {
        self.preferences
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn update(&self, f: impl FnOnce(&mut Preferences)) {
        let mut guard = self
            .preferences
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard);
    }
}

#[async_trait]
impl PreferenceRepository for InMemoryPreferenceRepository {
    async fn get_preferences(&self) -> Result<Preferences> {
        Ok(self.snapshot())
    }

    async fn save_preferences(&self, preferences: Preferences) -> Result<()> {
        self.update(|current| *current = preferences);
        Ok(())
    }

    async fn get_language(&self) -> Language {
        self.snapshot().language()
    }

    async fn set_language(&self, language: Language) -> Result<()> {
        self.update(|current| current.language = Some(language.code().to_string()));
        Ok(())
    }

    async fn get_session_token(&self) -> Option<String> {
        self.snapshot().session_token
    }

    async fn set_session_token(&self, token: String) -> Result<()> {
        self.update(|current| current.session_token = Some(token));
        Ok(())
    }

    async fn clear_session_token(&self) -> Result<()> {
        self.update(|current| current.session_token = None);
        Ok(())
    }
}
