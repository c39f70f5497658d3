//! Request bodies built from form input.
//!
//! Every payload here is sent exactly once per submit; nothing is retried.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::{PortalError, Result};

/// Channel used when the chat form leaves it blank.
pub const DEFAULT_CHAT_CHANNEL: &str = "general";
/// Workflow type used when the approval form leaves it blank.
pub const DEFAULT_APPROVAL_TYPE: &str = "leave";

/// Splits a comma-separated form field, trimming entries and dropping empties.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// A numeric form value as it goes on the wire.
///
/// Whole-number input stays an integer (`120`, also for `120.0` or `1.2e2`),
/// blank input is `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Number);

impl Amount {
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self(Number::from(0)));
        }
        if let Ok(int) = raw.parse::<i64>() {
            return Ok(Self(Number::from(int)));
        }
        let value = raw
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| PortalError::invalid_input(format!("'{raw}' is not a number")))?;
        if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
            return Ok(Self(Number::from(value as i64)));
        }
        Number::from_f64(value)
            .map(Self)
            .ok_or_else(|| PortalError::invalid_input(format!("'{raw}' is not a number")))
    }

    pub fn as_number(&self) -> &Number {
        &self.0
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(Number::from(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunTasksRequest {
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub department: String,
    pub modules: Vec<String>,
}

impl NewUser {
    /// Builds the payload from raw form fields; `modules` is comma-separated.
    pub fn from_form(username: &str, password: &str, department: &str, modules: &str) -> Self {
        Self {
            username: username.trim().to_string(),
            password: password.to_string(),
            department: department.trim().to_string(),
            modules: split_list(modules),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDraft {
    pub title: String,
    pub content: String,
    pub collaborators: Vec<String>,
}

impl DocumentDraft {
    pub fn from_form(title: &str, content: &str, collaborators: &str) -> Self {
        Self {
            title: title.to_string(),
            content: content.to_string(),
            collaborators: split_list(collaborators),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatDraft {
    pub channel: String,
    pub message: String,
}

impl ChatDraft {
    pub fn from_form(channel: &str, message: &str) -> Self {
        let channel = channel.trim();
        Self {
            channel: if channel.is_empty() {
                DEFAULT_CHAT_CHANNEL.to_string()
            } else {
                channel.to_string()
            },
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalForm {
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: Amount,
    pub reason: String,
}

/// Body of `POST /api/oa/approval`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalRequest {
    pub form: ApprovalForm,
}

impl ApprovalRequest {
    pub fn from_form(kind: &str, amount: &str, reason: &str) -> Result<Self> {
        let kind = kind.trim();
        Ok(Self {
            form: ApprovalForm {
                kind: if kind.is_empty() {
                    DEFAULT_APPROVAL_TYPE.to_string()
                } else {
                    kind.to_string()
                },
                amount: Amount::parse(amount)?,
                reason: reason.to_string(),
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseClaim {
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: Amount,
    pub description: String,
}

/// Body of `POST /api/finance/expense`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRequest {
    pub expense: ExpenseClaim,
}

impl ExpenseRequest {
    pub fn from_form(kind: &str, amount: &str, description: &str) -> Result<Self> {
        Ok(Self {
            expense: ExpenseClaim {
                kind: kind.trim().to_string(),
                amount: Amount::parse(amount)?,
                description: description.to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_list() {
        assert_eq!(split_list(" office, oa,,finance ,"), vec!["office", "oa", "finance"]);
        assert!(split_list("").is_empty());
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn test_amount_parse() {
        assert_eq!(serde_json::to_string(&Amount::parse("120").unwrap()).unwrap(), "120");
        assert_eq!(serde_json::to_string(&Amount::parse(" 99.5 ").unwrap()).unwrap(), "99.5");
        assert_eq!(serde_json::to_string(&Amount::parse("").unwrap()).unwrap(), "0");
        assert_eq!(serde_json::to_string(&Amount::parse("120.0").unwrap()).unwrap(), "120");
        assert_eq!(serde_json::to_string(&Amount::parse("1e3").unwrap()).unwrap(), "1000");
        assert_eq!(serde_json::to_string(&Amount::parse("-2.0").unwrap()).unwrap(), "-2");
        assert!(Amount::parse("inf").is_err());
        assert!(Amount::parse("ten").is_err());
        assert!(Amount::parse("NaN").is_err());
    }

    #[test]
    fn test_expense_body_shape() {
        let request = ExpenseRequest::from_form("travel", "120", "taxi").unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"expense": {"type": "travel", "amount": 120, "description": "taxi"}})
        );
    }

    #[test]
    fn test_approval_defaults_type() {
        let request = ApprovalRequest::from_form("  ", "3", "vacation").unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"form": {"type": "leave", "amount": 3, "reason": "vacation"}})
        );
    }

    #[test]
    fn test_chat_defaults_channel() {
        assert_eq!(ChatDraft::from_form("", "hi").channel, "general");
        assert_eq!(ChatDraft::from_form("ops", "hi").channel, "ops");
    }

    #[test]
    fn test_document_collaborators() {
        let draft = DocumentDraft::from_form("Plan", "Q3", "Alex, Jamie ,");
        assert_eq!(draft.collaborators, vec!["Alex", "Jamie"]);
    }
}
