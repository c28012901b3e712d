//! One handler per verb on the issue collection.
//!
//! # Responsibilities
//! - Resolve the project collection from the path (default when absent)
//! - Validate input shape and short-circuit on failure
//! - Delegate to the storage adapter
//! - Map outcomes to HTTP status and JSON body
//!
//! # Status Mapping
//! - Validation failures: 200 with an `error` body field
//! - Storage failures on read: 400
//! - Storage failures on write/update/delete (unknown id included): 200
//!   with an `error` body field

use std::collections::HashMap;
use std::time::Instant;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::types::{ActionError, ActionResult, CreateIssue, DeleteIssue, UpdateIssue};
use crate::http::server::AppState;
use crate::model::Issue;
use crate::observability::metrics;

/// Resolve the target collection; an absent or empty path segment falls
/// back to the configured default project.
fn resolve_project(state: &AppState, project: Option<Path<String>>) -> String {
    match project {
        Some(Path(name)) if !name.is_empty() => name,
        _ => state.default_project.clone(),
    }
}

/// GET /api/issues/{project}
///
/// Returns every issue in the collection, narrowed by a conjunctive
/// filter over the supplied query parameters. Each parameter must equal
/// the record's field coerced to a string; a key the record does not
/// have matches nothing.
pub async fn list_issues(
    State(state): State<AppState>,
    project: Option<Path<String>>,
    Query(filters): Query<HashMap<String, String>>,
) -> Response {
    let start = Instant::now();
    let project = resolve_project(&state, project);

    match state.store.find(&project).await {
        Ok(issues) => {
            let matched: Vec<Issue> = issues
                .into_iter()
                .filter(|issue| {
                    filters
                        .iter()
                        .all(|(key, value)| issue.field_str(key).as_deref() == Some(value.as_str()))
                })
                .collect();

            tracing::debug!(
                project = %project,
                filters = filters.len(),
                matched = matched.len(),
                "Listed issues"
            );
            metrics::record_request("GET", 200, &project, start);
            (StatusCode::OK, Json(matched)).into_response()
        }
        Err(e) => {
            tracing::error!(project = %project, error = %e, "Failed to list issues");
            metrics::record_request("GET", 400, &project, start);
            (
                StatusCode::BAD_REQUEST,
                Json(ActionError::new("Error finding issues")),
            )
                .into_response()
        }
    }
}

/// POST /api/issues/{project}
///
/// Creates an issue. `issue_title`, `issue_text`, and `created_by` are
/// required and must be non-empty; the optional fields default to "".
pub async fn create_issue(
    State(state): State<AppState>,
    project: Option<Path<String>>,
    Json(body): Json<CreateIssue>,
) -> Response {
    let start = Instant::now();
    let project = resolve_project(&state, project);

    let required = [&body.issue_title, &body.issue_text, &body.created_by];
    if required
        .iter()
        .any(|field| field.as_deref().unwrap_or("").is_empty())
    {
        metrics::record_request("POST", 200, &project, start);
        return (
            StatusCode::OK,
            Json(ActionError::new("required field(s) missing")),
        )
            .into_response();
    }

    let issue = Issue::new(
        body.issue_title.unwrap_or_default(),
        body.issue_text.unwrap_or_default(),
        body.created_by.unwrap_or_default(),
        body.assigned_to.unwrap_or_default(),
        body.status_text.unwrap_or_default(),
    );

    match state.store.insert(&project, &issue).await {
        Ok(()) => {
            tracing::debug!(project = %project, id = %issue.id, "Created issue");
            metrics::record_request("POST", 200, &project, start);
            (StatusCode::OK, Json(issue)).into_response()
        }
        Err(e) => {
            tracing::error!(project = %project, error = %e, "Failed to create issue");
            metrics::record_request("POST", 400, &project, start);
            (
                StatusCode::BAD_REQUEST,
                Json(ActionError::new("Error posting issue")),
            )
                .into_response()
        }
    }
}

/// PUT /api/issues/{project}
///
/// Partial update by `_id`. Supplied non-empty fields overwrite the
/// stored values; omitted fields are retained. `open` is applied only
/// when the supplied value is `true`, so an explicit `false` never
/// clears the flag.
pub async fn update_issue(
    State(state): State<AppState>,
    project: Option<Path<String>>,
    Json(body): Json<UpdateIssue>,
) -> Response {
    let start = Instant::now();
    let project = resolve_project(&state, project);

    let id = match body.id.as_deref() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => {
            metrics::record_request("PUT", 200, &project, start);
            return (StatusCode::OK, Json(ActionError::new("missing _id"))).into_response();
        }
    };

    if !body.has_update_fields() {
        metrics::record_request("PUT", 200, &project, start);
        return (
            StatusCode::OK,
            Json(ActionError::with_id("no update field(s) sent", id)),
        )
            .into_response();
    }

    let mut issue = match state.store.find_by_id(&project, &id).await {
        Ok(issue) => issue,
        Err(e) => {
            tracing::debug!(project = %project, id = %id, error = %e, "Update lookup failed");
            metrics::record_request("PUT", 200, &project, start);
            return (
                StatusCode::OK,
                Json(ActionError::with_id("could not update", id)),
            )
                .into_response();
        }
    };

    apply_update(&mut issue, &body);
    issue.touch();

    match state.store.save(&project, &issue).await {
        Ok(()) => {
            tracing::debug!(project = %project, id = %id, "Updated issue");
            metrics::record_request("PUT", 200, &project, start);
            (
                StatusCode::OK,
                Json(ActionResult {
                    result: "successfully updated",
                    id,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(project = %project, id = %id, error = %e, "Failed to save update");
            metrics::record_request("PUT", 200, &project, start);
            (
                StatusCode::OK,
                Json(ActionError::with_id("could not update", id)),
            )
                .into_response()
        }
    }
}

/// DELETE /api/issues/{project}
///
/// Removes an issue by `_id`.
pub async fn delete_issue(
    State(state): State<AppState>,
    project: Option<Path<String>>,
    Json(body): Json<DeleteIssue>,
) -> Response {
    let start = Instant::now();
    let project = resolve_project(&state, project);

    let id = match body.id.as_deref() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => {
            metrics::record_request("DELETE", 200, &project, start);
            return (StatusCode::OK, Json(ActionError::new("missing _id"))).into_response();
        }
    };

    match state.store.remove_by_id(&project, &id).await {
        Ok(()) => {
            tracing::debug!(project = %project, id = %id, "Deleted issue");
            metrics::record_request("DELETE", 200, &project, start);
            (
                StatusCode::OK,
                Json(ActionResult {
                    result: "successfully deleted",
                    id,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::debug!(project = %project, id = %id, error = %e, "Delete failed");
            metrics::record_request("DELETE", 200, &project, start);
            (
                StatusCode::OK,
                Json(ActionError::with_id("could not delete", id)),
            )
                .into_response()
        }
    }
}

/// Overwrite each supplied non-empty field; `open` only when truthy.
fn apply_update(issue: &mut Issue, update: &UpdateIssue) {
    let fields = [
        (&update.issue_title, &mut issue.issue_title),
        (&update.issue_text, &mut issue.issue_text),
        (&update.created_by, &mut issue.created_by),
        (&update.assigned_to, &mut issue.assigned_to),
        (&update.status_text, &mut issue.status_text),
    ];
    for (incoming, current) in fields {
        if let Some(value) = incoming {
            if !value.is_empty() {
                *current = value.clone();
            }
        }
    }

    // Matches the reference behavior: `open` can be set but never cleared
    // through this endpoint.
    if update.open == Some(true) {
        issue.open = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing() -> Issue {
        let mut issue = Issue::new(
            "old title".into(),
            "old text".into(),
            "alice".into(),
            "bob".into(),
            "triage".into(),
        );
        issue.open = false;
        issue
    }

    fn update_body(json: &str) -> UpdateIssue {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn apply_update_overwrites_only_supplied_fields() {
        let mut issue = existing();
        apply_update(
            &mut issue,
            &update_body(r#"{"_id":"x","issue_title":"new title","status_text":""}"#),
        );
        assert_eq!(issue.issue_title, "new title");
        assert_eq!(issue.issue_text, "old text");
        assert_eq!(issue.status_text, "triage");
    }

    #[test]
    fn apply_update_sets_open_only_when_true() {
        let mut issue = existing();
        apply_update(&mut issue, &update_body(r#"{"_id":"x","open":true}"#));
        assert!(issue.open);

        apply_update(&mut issue, &update_body(r#"{"_id":"x","open":false}"#));
        assert!(issue.open, "an explicit false never clears the flag");
    }
}
