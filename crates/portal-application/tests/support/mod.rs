//! In-memory [`PortalApi`] for controller tests.
//!
//! Behaves like a tiny portal server: submissions append to the matching
//! list, lists are returned in insertion order.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use portal_core::error::{PortalError, Result};
use portal_core::gateway::PortalApi;
use portal_core::model::{
    ApprovalEntry, ApprovalRequest, ApprovalSubmitted, ApprovalSummary, ChatDraft, ChatEntry,
    ChatSent, CreatedUser, Credentials, DocumentDraft, DocumentEntry, DocumentSaved, ExpenseEntry,
    ExpenseRequest, ExpenseSubmitted, ExpenseSummary, FeatureArea, LocalizedText, LoginResponse,
    ModuleDescriptor, NewUser, OfficeFeed, RunTasksRequest, RunTasksResponse, UserContext,
};
use tokio::sync::Notify;

#[derive(Default)]
pub struct MockPortalApi {
    pub user: Mutex<Option<Result<UserContext>>>,
    pub modules: Mutex<Option<Result<Vec<ModuleDescriptor>>>>,
    pub features: Mutex<Vec<FeatureArea>>,
    pub failures: Mutex<HashMap<&'static str, PortalError>>,
    pub expenses: Mutex<Vec<ExpenseEntry>>,
    pub approvals: Mutex<Vec<ApprovalEntry>>,
    pub documents: Mutex<Vec<DocumentEntry>>,
    pub messages: Mutex<Vec<ChatEntry>>,
    pub calls: Mutex<Vec<String>>,
    pub posted: Mutex<Vec<serde_json::Value>>,
    /// When set, submissions wait for a notification before answering.
    pub gate: Mutex<Option<Arc<Notify>>>,
}

impl MockPortalApi {
    pub fn new(user: UserContext, modules: Vec<ModuleDescriptor>) -> Self {
        let api = Self::default();
        *api.user.lock().unwrap() = Some(Ok(user));
        *api.modules.lock().unwrap() = Some(Ok(modules));
        api
    }

    pub fn fail(&self, method: &'static str, err: PortalError) {
        self.failures.lock().unwrap().insert(method, err);
    }

    pub fn gate(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(notify.clone());
        notify
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, method: &str) -> usize {
        self.calls().iter().filter(|c| c.as_str() == method).count()
    }

    fn record(&self, method: &'static str) -> Result<()> {
        self.calls.lock().unwrap().push(method.to_string());
        match self.failures.lock().unwrap().get(method) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn wait_gate(&self) {
        let gate = self.gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }

    fn post(&self, body: &impl serde::Serialize) {
        self.posted
            .lock()
            .unwrap()
            .push(serde_json::to_value(body).unwrap());
    }
}

#[async_trait]
impl PortalApi for MockPortalApi {
    async fn me(&self) -> Result<UserContext> {
        self.record("me")?;
        self.user
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Err(PortalError::unauthenticated("/login.html")))
    }

    async fn modules(&self) -> Result<Vec<ModuleDescriptor>> {
        self.record("modules")?;
        self.modules.lock().unwrap().clone().unwrap_or(Ok(Vec::new()))
    }

    async fn features(&self) -> Result<Vec<FeatureArea>> {
        self.record("features")?;
        Ok(self.features.lock().unwrap().clone())
    }

    async fn run_tasks(&self, request: &RunTasksRequest) -> Result<RunTasksResponse> {
        self.record("run_tasks")?;
        self.post(request);
        let results: serde_json::Map<String, serde_json::Value> = request
            .tasks
            .iter()
            .map(|t| (t.clone(), serde_json::json!("ok")))
            .collect();
        Ok(RunTasksResponse {
            results: serde_json::Value::Object(results),
            user: None,
        })
    }

    async fn create_user(&self, user: &NewUser) -> Result<CreatedUser> {
        self.record("create_user")?;
        self.post(user);
        Ok(CreatedUser {
            created: user.username.clone(),
        })
    }

    async fn save_document(&self, draft: &DocumentDraft) -> Result<DocumentSaved> {
        self.record("save_document")?;
        self.wait_gate().await;
        self.post(draft);
        let mut documents = self.documents.lock().unwrap();
        let entry = DocumentEntry {
            title: Some(draft.title.clone()),
            content: draft.content.clone(),
            version: Some((documents.len() + 1).to_string()),
        };
        documents.push(entry.clone());
        Ok(DocumentSaved {
            document: serde_json::to_value(entry).unwrap(),
        })
    }

    async fn send_chat(&self, draft: &ChatDraft) -> Result<ChatSent> {
        self.record("send_chat")?;
        self.post(draft);
        let entry = ChatEntry {
            channel: draft.channel.clone(),
            from: "alice".to_string(),
            message: draft.message.clone(),
        };
        self.messages.lock().unwrap().push(entry.clone());
        Ok(ChatSent {
            message: serde_json::to_value(entry).unwrap(),
        })
    }

    async fn office_feed(&self) -> Result<OfficeFeed> {
        self.record("office_feed")?;
        Ok(OfficeFeed {
            documents: self.documents.lock().unwrap().clone(),
            messages: self.messages.lock().unwrap().clone(),
        })
    }

    async fn submit_approval(&self, request: &ApprovalRequest) -> Result<ApprovalSubmitted> {
        self.record("submit_approval")?;
        self.post(request);
        let entry = ApprovalEntry {
            form: Some(ApprovalSummary {
                kind: Some(request.form.kind.clone()),
            }),
            status: "pending".to_string(),
            submitted_by: Some("alice".to_string()),
            next_step: Some("manager".to_string()),
        };
        self.approvals.lock().unwrap().push(entry.clone());
        Ok(ApprovalSubmitted {
            approval: serde_json::to_value(entry).unwrap(),
        })
    }

    async fn list_approvals(&self) -> Result<Vec<ApprovalEntry>> {
        self.record("list_approvals")?;
        Ok(self.approvals.lock().unwrap().clone())
    }

    async fn submit_expense(&self, request: &ExpenseRequest) -> Result<ExpenseSubmitted> {
        self.record("submit_expense")?;
        self.wait_gate().await;
        self.post(request);
        let entry = ExpenseEntry {
            expense: Some(ExpenseSummary {
                kind: Some(request.expense.kind.clone()),
                amount: Some(request.expense.amount.to_string()),
                description: Some(request.expense.description.clone()),
            }),
            status: "pending".to_string(),
            next_approver: Some("manager".to_string()),
        };
        self.expenses.lock().unwrap().push(entry.clone());
        Ok(ExpenseSubmitted {
            expense: serde_json::to_value(entry).unwrap(),
        })
    }

    async fn list_expenses(&self) -> Result<Vec<ExpenseEntry>> {
        self.record("list_expenses")?;
        Ok(self.expenses.lock().unwrap().clone())
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        self.record("login")?;
        if credentials.password != "secret" {
            return Err(PortalError::request(401, "Invalid credentials"));
        }
        Ok(LoginResponse {
            ok: true,
            modules: vec!["office".to_string()],
            session_token: Some("tok-42".to_string()),
        })
    }

    async fn logout(&self) -> Result<()> {
        self.record("logout")
    }
}

pub fn module(key: &str) -> ModuleDescriptor {
    ModuleDescriptor::new(
        key,
        format!("/{key}.html"),
        LocalizedText::new(key.to_uppercase(), key.to_uppercase()),
    )
}

pub fn alice() -> UserContext {
    UserContext::new("alice").with_department("Finance")
}
