//! HTTP implementation of [`PortalApi`] over `reqwest`.
//!
//! Every request sends `Content-Type: application/json` and, when a session
//! is held, `Cookie: session=<token>`. Responses are mapped as follows:
//!
//! - 2xx: body decoded as JSON
//! - 401: [`PortalError::Unauthenticated`] pointing at the login page
//!   (except on `login`, where it is an ordinary failure; on `logout` it
//!   means the session had already expired)
//! - other: [`PortalError::Request`] with the server's `error` text, the raw
//!   body, or the status reason phrase, in that order

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use portal_core::config::PortalConfig;
use portal_core::error::{PortalError, Result};
use portal_core::gateway::{PortalApi, endpoints};
use portal_core::model::{
    ApprovalEntry, ApprovalRequest, ApprovalSubmitted, ChatDraft, ChatSent, CreatedUser,
    Credentials, DocumentDraft, DocumentSaved, ExpenseEntry, ExpenseRequest, ExpenseSubmitted,
    FeatureArea, FeaturesResponse, ItemList, LoginResponse, ModuleDescriptor, ModulesResponse,
    NewUser, OfficeFeed, RunTasksRequest, RunTasksResponse, UserContext,
};
use reqwest::header::{CONTENT_TYPE, COOKIE, HeaderMap, SET_COOKIE};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Name of the session cookie issued by `/api/login`.
pub const SESSION_COOKIE: &str = "session";

#[derive(Clone)]
pub struct HttpPortalGateway {
    client: Client,
    config: PortalConfig,
    session: Arc<RwLock<Option<String>>>,
}

/// What to do with a 401.
#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthPolicy {
    Redirect,
    Report,
}

impl HttpPortalGateway {
    pub fn new(config: PortalConfig, session_token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            config,
            session: Arc::new(RwLock::new(session_token)),
        }
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// Session token currently attached to requests.
    pub fn session_token(&self) -> Option<String> {
        self.session.read().unwrap_or_else(|p| p.into_inner()).clone()
    }

    fn set_session_token(&self, token: Option<String>) {
        *self.session.write().unwrap_or_else(|p| p.into_inner()) = token;
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self
            .client
            .request(method, self.config.url(path))
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = self.session_token() {
            builder = builder.header(COOKIE, format!("{SESSION_COOKIE}={token}"));
        }
        builder
    }

    async fn send(&self, builder: RequestBuilder, path: &str, policy: AuthPolicy) -> Result<Response> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!("[Gateway] {} failed: {}", path, e);
            PortalError::transport(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED && policy == AuthPolicy::Redirect {
            tracing::info!("[Gateway] {} returned 401, redirecting to login", path);
            return Err(PortalError::unauthenticated(self.config.login_path.clone()));
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(status, &body);
        tracing::warn!("[Gateway] {} returned {}: {}", path, status.as_u16(), message);
        Err(PortalError::request(status.as_u16(), message))
    }

    async fn decode<T: DeserializeOwned>(response: Response, path: &str) -> Result<T> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| PortalError::transport(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!("[Gateway] {} returned an unreadable body: {}", path, e);
            PortalError::from(e)
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .send(self.request(Method::GET, path), path, AuthPolicy::Redirect)
            .await?;
        Self::decode(response, path).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!("[Gateway] POST {}", path);
        let response = self
            .send(
                self.request(Method::POST, path).json(body),
                path,
                AuthPolicy::Redirect,
            )
            .await?;
        Self::decode(response, path).await
    }
}

/// Picks the user-facing message for a failed response.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body)
        && let Some(serde_json::Value::String(error)) = map.get("error")
    {
        return error.clone();
    }
    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string())
}

/// Extracts the session cookie value from `Set-Cookie` headers.
fn session_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|cookie| {
            let pair = cookie.split(';').next()?.trim();
            let (name, value) = pair.split_once('=')?;
            (name.trim() == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
        })
}

#[async_trait]
impl PortalApi for HttpPortalGateway {
    async fn me(&self) -> Result<UserContext> {
        self.get(endpoints::ME).await
    }

    async fn modules(&self) -> Result<Vec<ModuleDescriptor>> {
        match self.get::<ModulesResponse>(endpoints::MODULES).await {
            Ok(response) => Ok(response.modules),
            Err(e) if e.is_unauthenticated() => Err(e),
            Err(e) => {
                tracing::warn!("[Gateway] Module list unavailable, using empty list: {}", e);
                Ok(Vec::new())
            }
        }
    }

    async fn features(&self) -> Result<Vec<FeatureArea>> {
        let response: FeaturesResponse = self.get(endpoints::FEATURES).await?;
        Ok(response.areas)
    }

    async fn run_tasks(&self, request: &RunTasksRequest) -> Result<RunTasksResponse> {
        self.post(endpoints::RUN, request).await
    }

    async fn create_user(&self, user: &NewUser) -> Result<CreatedUser> {
        self.post(endpoints::USERS, user).await
    }

    async fn save_document(&self, draft: &DocumentDraft) -> Result<DocumentSaved> {
        self.post(endpoints::OFFICE_DOCUMENT, draft).await
    }

    async fn send_chat(&self, draft: &ChatDraft) -> Result<ChatSent> {
        self.post(endpoints::OFFICE_CHAT, draft).await
    }

    async fn office_feed(&self) -> Result<OfficeFeed> {
        self.get(endpoints::OFFICE_FEED).await
    }

    async fn submit_approval(&self, request: &ApprovalRequest) -> Result<ApprovalSubmitted> {
        self.post(endpoints::OA_APPROVAL, request).await
    }

    async fn list_approvals(&self) -> Result<Vec<ApprovalEntry>> {
        let list: ItemList<ApprovalEntry> = self.get(endpoints::OA_APPROVALS).await?;
        Ok(list.items)
    }

    async fn submit_expense(&self, request: &ExpenseRequest) -> Result<ExpenseSubmitted> {
        self.post(endpoints::FINANCE_EXPENSE, request).await
    }

    async fn list_expenses(&self) -> Result<Vec<ExpenseEntry>> {
        let list: ItemList<ExpenseEntry> = self.get(endpoints::FINANCE_EXPENSES).await?;
        Ok(list.items)
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        tracing::info!("[Gateway] Signing in as {}", credentials.username);
        let builder = self.request(Method::POST, endpoints::LOGIN).json(credentials);
        let response = self.send(builder, endpoints::LOGIN, AuthPolicy::Report).await?;
        let token = session_from_headers(response.headers());
        let mut login: LoginResponse = Self::decode(response, endpoints::LOGIN).await?;
        if let Some(token) = token {
            self.set_session_token(Some(token.clone()));
            login.session_token = Some(token);
        }
        Ok(login)
    }

    async fn logout(&self) -> Result<()> {
        let builder = self
            .request(Method::POST, endpoints::LOGOUT)
            .json(&serde_json::json!({}));
        let result = self
            .send(builder, endpoints::LOGOUT, AuthPolicy::Redirect)
            .await
            .map(|_| ());
        self.set_session_token(None);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_error_message_prefers_error_field() {
        let msg = error_message(StatusCode::BAD_REQUEST, r#"{"error":"Unknown tasks: x"}"#);
        assert_eq!(msg, "Unknown tasks: x");
    }

    #[test]
    fn test_error_message_falls_back_to_body_then_reason() {
        assert_eq!(
            error_message(StatusCode::FORBIDDEN, "module not granted\n"),
            "module not granted"
        );
        assert_eq!(
            error_message(StatusCode::FORBIDDEN, r#"{"detail":"x"}"#),
            r#"{"detail":"x"}"#
        );
        assert_eq!(error_message(StatusCode::NOT_FOUND, ""), "Not Found");
    }

    #[test]
    fn test_session_cookie_extraction() {
        let mut headers = HeaderMap::new();
        headers.append(SET_COOKIE, HeaderValue::from_static("theme=dark; Path=/"));
        headers.append(
            SET_COOKIE,
            HeaderValue::from_static("session=abc123; HttpOnly; Path=/"),
        );
        assert_eq!(session_from_headers(&headers).as_deref(), Some("abc123"));
        assert_eq!(session_from_headers(&HeaderMap::new()), None);
    }
}
