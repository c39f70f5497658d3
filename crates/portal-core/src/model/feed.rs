//! Activity feed entries.
//!
//! The server owns ordering and persistence of these records; the client
//! only reads them. Parsing is lenient: missing or `null` fields default,
//! scalar fields accept strings or numbers, unknown fields are ignored.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A saved document version from the office feed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentEntry {
    #[serde(
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub content: String,
    #[serde(
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,
}

/// A chat or meeting message from the office feed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatEntry {
    #[serde(default, deserialize_with = "text")]
    pub channel: String,
    #[serde(default, deserialize_with = "text")]
    pub from: String,
    #[serde(default, deserialize_with = "text")]
    pub message: String,
}

/// One row of the merged office feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfficeActivity {
    Document(DocumentEntry),
    Message(ChatEntry),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApprovalSummary {
    #[serde(
        rename = "type",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
}

/// A submitted workflow form and where it is routed next.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApprovalEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<ApprovalSummary>,
    #[serde(default, deserialize_with = "text")]
    pub status: String,
    #[serde(
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub submitted_by: Option<String>,
    #[serde(
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_step: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExpenseSummary {
    #[serde(
        rename = "type",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
    /// Kept as display text; `120` stays `"120"`.
    #[serde(
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<String>,
    #[serde(
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

/// A submitted expense claim and its next approver.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExpenseEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense: Option<ExpenseSummary>,
    #[serde(default, deserialize_with = "text")]
    pub status: String,
    #[serde(
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_approver: Option<String>,
}

/// Display text of a scalar JSON value. `null` has none.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_entry_lenient() {
        let json = r#"{"expense":{"type":"travel","amount":120,"description":"taxi","receipt":"r.png"},"status":"pending","next_approver":"manager","id":7}"#;
        let entry: ExpenseEntry = serde_json::from_str(json).unwrap();
        let expense = entry.expense.unwrap();
        assert_eq!(expense.kind.as_deref(), Some("travel"));
        assert_eq!(expense.amount.as_deref(), Some("120"));
        assert_eq!(entry.next_approver.as_deref(), Some("manager"));
    }

    #[test]
    fn test_empty_objects_parse() {
        let approval: ApprovalEntry = serde_json::from_str("{}").unwrap();
        assert!(approval.form.is_none());
        assert_eq!(approval.status, "");
        let doc: DocumentEntry = serde_json::from_str(r#"{"content":"x"}"#).unwrap();
        assert_eq!(doc.version, None);
    }

    #[test]
    fn test_null_fields_fall_back_to_defaults() {
        let approval: ApprovalEntry = serde_json::from_str(
            r#"{"form":{"type":null},"status":null,"submitted_by":"bob","next_step":null}"#,
        )
        .unwrap();
        assert_eq!(approval.status, "");
        assert_eq!(approval.form.unwrap().kind, None);
        assert_eq!(approval.next_step, None);

        let chat: ChatEntry =
            serde_json::from_str(r#"{"channel":"general","from":null,"message":null}"#).unwrap();
        assert_eq!(chat.from, "");
        assert_eq!(chat.message, "");

        let expense: ExpenseEntry =
            serde_json::from_str(r#"{"expense":null,"status":null,"next_approver":null}"#).unwrap();
        assert_eq!(expense, ExpenseEntry::default());
    }

    #[test]
    fn test_version_accepts_string_or_number() {
        let numeric: DocumentEntry =
            serde_json::from_str(r#"{"title":"Plan","content":null,"version":2}"#).unwrap();
        assert_eq!(numeric.version.as_deref(), Some("2"));
        assert_eq!(numeric.content, "");

        let textual: DocumentEntry =
            serde_json::from_str(r#"{"title":"Plan","version":"2"}"#).unwrap();
        assert_eq!(textual.version.as_deref(), Some("2"));
    }
}
