//! Core domain of the portal client.
//!
//! # Module Structure
//!
//! - `config`: client configuration model
//! - `error`: [`PortalError`] and the crate-wide [`Result`]
//! - `i18n`: languages, string table and module page copy
//! - `model`: identity, module descriptors, payloads and feed entries
//! - `gateway`: the [`PortalApi`] trait implemented by HTTP and test gateways
//! - `preferences`: persisted language and session token
//! - `view`: pure view-model builders

pub mod config;
pub mod error;
pub mod gateway;
pub mod i18n;
pub mod model;
pub mod preferences;
pub mod view;

pub use config::PortalConfig;
pub use error::{PortalError, Result};
pub use gateway::PortalApi;
pub use i18n::{Catalog, Language, TextKey};
pub use preferences::{InMemoryPreferenceRepository, PreferenceRepository, Preferences};
