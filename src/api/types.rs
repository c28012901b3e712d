//! Request and response payloads for the issue API.
//!
//! All inbound fields are optional at the type level; the handlers decide
//! which absences are validation errors, so a missing `_id` yields the
//! API's `{"error": "missing _id"}` body instead of a deserialization
//! rejection.

use serde::{Deserialize, Serialize};

/// POST body for creating an issue.
#[derive(Debug, Deserialize)]
pub struct CreateIssue {
    pub issue_title: Option<String>,
    pub issue_text: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status_text: Option<String>,
}

/// PUT body for a partial update.
#[derive(Debug, Deserialize)]
pub struct UpdateIssue {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub issue_title: Option<String>,
    pub issue_text: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status_text: Option<String>,
    pub open: Option<bool>,
}

impl UpdateIssue {
    /// Whether any mutable string field was supplied non-empty.
    ///
    /// `open` intentionally does not count as an update field.
    pub fn has_update_fields(&self) -> bool {
        [
            &self.issue_title,
            &self.issue_text,
            &self.created_by,
            &self.assigned_to,
            &self.status_text,
        ]
        .iter()
        .any(|field| matches!(field, Some(value) if !value.is_empty()))
    }
}

/// DELETE body carrying the id to remove.
#[derive(Debug, Deserialize)]
pub struct DeleteIssue {
    #[serde(rename = "_id")]
    pub id: Option<String>,
}

/// Success body for PUT and DELETE.
#[derive(Debug, Serialize)]
pub struct ActionResult {
    pub result: &'static str,
    #[serde(rename = "_id")]
    pub id: String,
}

/// Error body, optionally echoing the id the client sent.
#[derive(Debug, Serialize)]
pub struct ActionError {
    pub error: &'static str,
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ActionError {
    pub fn new(error: &'static str) -> Self {
        Self { error, id: None }
    }

    pub fn with_id(error: &'static str, id: impl Into<String>) -> Self {
        Self {
            error,
            id: Some(id.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strings_are_not_update_fields() {
        let update: UpdateIssue =
            serde_json::from_str(r#"{"_id":"abc","issue_title":"","open":true}"#).unwrap();
        assert!(!update.has_update_fields());
    }

    #[test]
    fn any_supplied_field_counts() {
        let update: UpdateIssue =
            serde_json::from_str(r#"{"_id":"abc","assigned_to":"dave"}"#).unwrap();
        assert!(update.has_update_fields());
    }

    #[test]
    fn action_error_omits_absent_id() {
        let body = serde_json::to_string(&ActionError::new("missing _id")).unwrap();
        assert_eq!(body, r#"{"error":"missing _id"}"#);
    }
}
