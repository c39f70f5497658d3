//! Response envelopes of the portal API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::feature::FeatureArea;
use super::feed::{ChatEntry, DocumentEntry, OfficeActivity};
use super::module::ModuleDescriptor;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModulesResponse {
    #[serde(default)]
    pub modules: Vec<ModuleDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeaturesResponse {
    #[serde(default)]
    pub areas: Vec<FeatureArea>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub modules: Vec<String>,
    /// Session cookie captured from the response headers by the gateway.
    #[serde(skip)]
    pub session_token: Option<String>,
}

/// Results of `POST /api/run`, keyed by task id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RunTasksResponse {
    #[serde(default)]
    pub results: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreatedUser {
    pub created: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentSaved {
    #[serde(default)]
    pub document: Value,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChatSent {
    #[serde(default)]
    pub message: Value,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApprovalSubmitted {
    #[serde(default)]
    pub approval: Value,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExpenseSubmitted {
    #[serde(default)]
    pub expense: Value,
}

/// `GET /api/office/feed`: documents and messages in server order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OfficeFeed {
    #[serde(default)]
    pub documents: Vec<DocumentEntry>,
    #[serde(default)]
    pub messages: Vec<ChatEntry>,
}

impl OfficeFeed {
    /// Documents followed by messages, in server order.
    pub fn into_activities(self) -> Vec<OfficeActivity> {
        self.documents
            .into_iter()
            .map(OfficeActivity::Document)
            .chain(self.messages.into_iter().map(OfficeActivity::Message))
            .collect()
    }
}

/// Generic `{items: [...]}` list envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemList<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}
