//! Activity feeds.
//!
//! [`feed`] turns a list of server records into either the localized empty
//! notice or one card per record. Callers pass records in display order;
//! the workbenches reverse the server array first so the newest is on top.

use crate::i18n::{Catalog, Language, TextKey};
use crate::model::{ApprovalEntry, ChatEntry, DocumentEntry, ExpenseEntry, OfficeActivity};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedCard {
    pub title: String,
    pub body: String,
}

impl FeedCard {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedView {
    Empty(String),
    Cards(Vec<FeedCard>),
}

impl FeedView {
    pub fn is_empty(&self) -> bool {
        matches!(self, FeedView::Empty(_))
    }

    pub fn cards(&self) -> &[FeedCard] {
        match self {
            FeedView::Empty(_) => &[],
            FeedView::Cards(cards) => cards,
        }
    }
}

pub fn feed<T, F>(items: &[T], render: F, lang: Language) -> FeedView
where
    F: Fn(&T) -> FeedCard,
{
    if items.is_empty() {
        return FeedView::Empty(Catalog::new(lang).text(TextKey::FeedEmpty));
    }
    FeedView::Cards(items.iter().map(render).collect())
}

pub fn document_card(doc: &DocumentEntry) -> FeedCard {
    let title = doc.title.as_deref().filter(|t| !t.is_empty()).unwrap_or("Doc");
    let title = match doc.version.as_deref().filter(|v| !v.is_empty()) {
        Some(version) => format!("{title} v{version}"),
        None => title.to_string(),
    };
    FeedCard::new(title, doc.content.clone())
}

pub fn chat_card(chat: &ChatEntry) -> FeedCard {
    FeedCard::new(format!("{} · {}", chat.channel, chat.from), chat.message.clone())
}

pub fn office_card(activity: &OfficeActivity) -> FeedCard {
    match activity {
        OfficeActivity::Document(doc) => document_card(doc),
        OfficeActivity::Message(chat) => chat_card(chat),
    }
}

pub fn approval_card(approval: &ApprovalEntry) -> FeedCard {
    let kind = approval
        .form
        .as_ref()
        .and_then(|form| form.kind.as_deref())
        .filter(|kind| !kind.is_empty())
        .unwrap_or("approval");
    FeedCard::new(
        format!("{kind} · {}", approval.status),
        format!(
            "{} -> {}",
            approval.submitted_by.as_deref().unwrap_or_default(),
            approval.next_step.as_deref().unwrap_or_default()
        ),
    )
}

pub fn expense_card(entry: &ExpenseEntry) -> FeedCard {
    let expense = entry.expense.as_ref();
    let kind = expense
        .and_then(|e| e.kind.as_deref())
        .filter(|kind| !kind.is_empty())
        .unwrap_or("expense");
    let amount = expense
        .and_then(|e| e.amount.as_deref())
        .filter(|amount| !amount.is_empty())
        .unwrap_or("0");
    FeedCard::new(
        format!("{kind} · {}", entry.status),
        format!(
            "{amount} · {}",
            entry.next_approver.as_deref().unwrap_or_default()
        ),
    )
}
