//! The issue record.
//!
//! # Responsibilities
//! - Define the persisted record layout (serialized with `_id` as the key field)
//! - Stamp server-generated fields on creation (id, timestamps, open flag)
//! - Coerce fields to strings for query-parameter filtering
//!
//! # Design Decisions
//! - Timestamps stored as ISO 8601 strings with millisecond precision,
//!   so filter comparisons and JSON output need no conversion
//! - Identifiers are opaque strings (UUID v4); comparisons always operate
//!   on the string representation

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single tracked issue belonging to one project collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Issue {
    /// Unique identifier, immutable after creation.
    #[serde(rename = "_id")]
    #[sqlx(rename = "id")]
    pub id: String,

    pub issue_title: String,
    pub issue_text: String,
    pub created_by: String,

    #[serde(default)]
    pub assigned_to: String,

    #[serde(default)]
    pub status_text: String,

    /// Open/closed flag; new issues are always open.
    pub open: bool,

    /// Creation time, never changes after creation.
    pub created_on: String,

    /// Refreshed on every successful update.
    pub updated_on: String,
}

impl Issue {
    /// Create a new open issue with a generated id and identical timestamps.
    pub fn new(
        issue_title: String,
        issue_text: String,
        created_by: String,
        assigned_to: String,
        status_text: String,
    ) -> Self {
        let now = now_iso();
        Self {
            id: Uuid::new_v4().to_string(),
            issue_title,
            issue_text,
            created_by,
            assigned_to,
            status_text,
            open: true,
            created_on: now.clone(),
            updated_on: now,
        }
    }

    /// Refresh the update timestamp to the current time.
    pub fn touch(&mut self) {
        self.updated_on = now_iso();
    }

    /// The string form of a field, for query-parameter filtering.
    ///
    /// Unknown keys return `None`, so a filter on a field the record does
    /// not have never matches.
    pub fn field_str(&self, key: &str) -> Option<String> {
        match key {
            "_id" => Some(self.id.clone()),
            "issue_title" => Some(self.issue_title.clone()),
            "issue_text" => Some(self.issue_text.clone()),
            "created_by" => Some(self.created_by.clone()),
            "assigned_to" => Some(self.assigned_to.clone()),
            "status_text" => Some(self.status_text.clone()),
            "open" => Some(self.open.to_string()),
            "created_on" => Some(self.created_on.clone()),
            "updated_on" => Some(self.updated_on.clone()),
            _ => None,
        }
    }
}

/// Current time as an ISO 8601 string, e.g. `2026-08-23T10:15:30.123Z`.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Issue {
        Issue::new(
            "Server crashes on boot".into(),
            "Panics when the config file is empty".into(),
            "alice".into(),
            String::new(),
            String::new(),
        )
    }

    #[test]
    fn new_issue_is_open_with_matching_timestamps() {
        let issue = sample();
        assert!(!issue.id.is_empty());
        assert!(issue.open);
        assert_eq!(issue.created_on, issue.updated_on);
    }

    #[test]
    fn field_str_coerces_open_to_string() {
        let mut issue = sample();
        assert_eq!(issue.field_str("open").as_deref(), Some("true"));
        issue.open = false;
        assert_eq!(issue.field_str("open").as_deref(), Some("false"));
    }

    #[test]
    fn field_str_unknown_key_matches_nothing() {
        assert_eq!(sample().field_str("priority"), None);
    }

    #[test]
    fn serializes_id_under_underscore_key() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value.get("_id").is_some());
        assert!(value.get("id").is_none());
    }
}
