//! Portal data model.
//!
//! - `user`: identity from `/api/me`
//! - `module`: module descriptors and localized labels
//! - `feature`: feature coverage areas
//! - `payload`: request bodies built from form input
//! - `feed`: activity feed entries
//! - `response`: response envelopes

mod feature;
mod feed;
mod module;
mod payload;
mod response;
mod user;

pub use feature::{FeatureArea, FeatureItem, FeatureStatus};
pub use feed::{
    ApprovalEntry, ApprovalSummary, ChatEntry, DocumentEntry, ExpenseEntry, ExpenseSummary,
    OfficeActivity,
};
pub use module::{DASHBOARD_KEY, LocalizedText, ModuleDescriptor, TaskDescriptor};
pub use payload::{
    Amount, ApprovalForm, ApprovalRequest, ChatDraft, Credentials, DEFAULT_APPROVAL_TYPE,
    DEFAULT_CHAT_CHANNEL, DocumentDraft, ExpenseClaim, ExpenseRequest, NewUser, RunTasksRequest,
    split_list,
};
pub use response::{
    ApprovalSubmitted, ChatSent, CreatedUser, DocumentSaved, ExpenseSubmitted, FeaturesResponse,
    ItemList, LoginResponse, ModulesResponse, OfficeFeed, RunTasksResponse,
};
pub use user::UserContext;
