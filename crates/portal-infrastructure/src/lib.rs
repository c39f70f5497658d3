//! Infrastructure layer for the portal client.
//!
//! - `paths`: config directory resolution
//! - `storage`: atomic TOML file handle
//! - `config_service`: cached `config.toml` loader
//! - `preference_repository`: persisted language and session token
//! - `http_gateway`: `reqwest` implementation of the portal API

pub mod config_service;
pub mod http_gateway;
pub mod paths;
pub mod preference_repository;
pub mod storage;

pub use config_service::ConfigService;
pub use http_gateway::HttpPortalGateway;
pub use paths::{PortalPaths, ServiceType};
pub use preference_repository::TomlPreferenceRepository;
