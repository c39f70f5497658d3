//! Portal API gateway trait.
//!
//! One method per UI action, one HTTP call per method. Implementations map
//! a 401 to [`PortalError::Unauthenticated`](crate::PortalError::Unauthenticated)
//! and every other non-2xx to a `Request` error carrying the server's text.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{
    ApprovalEntry, ApprovalRequest, ApprovalSubmitted, ChatDraft, ChatSent, CreatedUser,
    Credentials, DocumentDraft, DocumentSaved, ExpenseEntry, ExpenseRequest, ExpenseSubmitted,
    FeatureArea, LoginResponse, ModuleDescriptor, NewUser, OfficeFeed, RunTasksRequest,
    RunTasksResponse, UserContext,
};

/// Endpoint paths, relative to the portal base URL.
pub mod endpoints {
    pub const ME: &str = "/api/me";
    pub const MODULES: &str = "/api/modules";
    pub const FEATURES: &str = "/api/features";
    pub const RUN: &str = "/api/run";
    pub const USERS: &str = "/api/users";
    pub const LOGIN: &str = "/api/login";
    pub const LOGOUT: &str = "/api/logout";
    pub const OFFICE_DOCUMENT: &str = "/api/office/document";
    pub const OFFICE_CHAT: &str = "/api/office/chat";
    pub const OFFICE_FEED: &str = "/api/office/feed";
    pub const OA_APPROVAL: &str = "/api/oa/approval";
    pub const OA_APPROVALS: &str = "/api/oa/approvals";
    pub const FINANCE_EXPENSE: &str = "/api/finance/expense";
    pub const FINANCE_EXPENSES: &str = "/api/finance/expenses";
}

#[async_trait]
pub trait PortalApi: Send + Sync {
    /// `GET /api/me`
    async fn me(&self) -> Result<UserContext>;

    /// `GET /api/modules`. Failures other than 401 yield an empty list.
    async fn modules(&self) -> Result<Vec<ModuleDescriptor>>;

    /// `GET /api/features`
    async fn features(&self) -> Result<Vec<FeatureArea>>;

    /// `POST /api/run`
    async fn run_tasks(&self, request: &RunTasksRequest) -> Result<RunTasksResponse>;

    /// `POST /api/users` (admin only on the server side)
    async fn create_user(&self, user: &NewUser) -> Result<CreatedUser>;

    async fn save_document(&self, draft: &DocumentDraft) -> Result<DocumentSaved>;

    async fn send_chat(&self, draft: &ChatDraft) -> Result<ChatSent>;

    async fn office_feed(&self) -> Result<OfficeFeed>;

    async fn submit_approval(&self, request: &ApprovalRequest) -> Result<ApprovalSubmitted>;

    async fn list_approvals(&self) -> Result<Vec<ApprovalEntry>>;

    async fn submit_expense(&self, request: &ExpenseRequest) -> Result<ExpenseSubmitted>;

    async fn list_expenses(&self) -> Result<Vec<ExpenseEntry>>;

    /// `POST /api/login`. Bad credentials are a `Request` error, not a redirect.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse>;

    /// `POST /api/logout`. The local session is dropped even if the call fails.
    async fn logout(&self) -> Result<()>;
}
