//! SQLite-backed issue store.
//!
//! # Responsibilities
//! - Open the connection pool once at startup
//! - Create the schema if it does not exist
//! - Generic per-project keyed operations: find, find_by_id, insert,
//!   save, remove_by_id
//!
//! # Design Decisions
//! - `find` returns records in insertion (rowid) order, the store's
//!   natural retrieval order
//! - Query-parameter filtering happens in the handlers, not in SQL;
//!   the adapter stays a plain keyed collection

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::schema::DatabaseConfig;
use crate::model::Issue;
use crate::store::error::StoreError;

const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS issues (
    project     TEXT    NOT NULL,
    id          TEXT    NOT NULL,
    issue_title TEXT    NOT NULL,
    issue_text  TEXT    NOT NULL,
    created_by  TEXT    NOT NULL,
    assigned_to TEXT    NOT NULL DEFAULT '',
    status_text TEXT    NOT NULL DEFAULT '',
    open        INTEGER NOT NULL,
    created_on  TEXT    NOT NULL,
    updated_on  TEXT    NOT NULL,
    PRIMARY KEY (project, id)
)";

/// Storage adapter for issue records, shared across handlers via the
/// cloneable inner pool.
#[derive(Clone)]
pub struct IssueStore {
    pool: SqlitePool,
}

impl IssueStore {
    /// Open the pool, creating the database file and schema when missing.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        sqlx::query(SCHEMA).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// All issues in a project's collection, in insertion order.
    pub async fn find(&self, project: &str) -> Result<Vec<Issue>, StoreError> {
        let issues = sqlx::query_as::<_, Issue>(
            "SELECT id, issue_title, issue_text, created_by, assigned_to, status_text, \
             open, created_on, updated_on \
             FROM issues WHERE project = ? ORDER BY rowid",
        )
        .bind(project)
        .fetch_all(&self.pool)
        .await?;

        Ok(issues)
    }

    /// Look up a single issue by id within a project.
    pub async fn find_by_id(&self, project: &str, id: &str) -> Result<Issue, StoreError> {
        sqlx::query_as::<_, Issue>(
            "SELECT id, issue_title, issue_text, created_by, assigned_to, status_text, \
             open, created_on, updated_on \
             FROM issues WHERE project = ? AND id = ?",
        )
        .bind(project)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    /// Persist a newly created issue.
    pub async fn insert(&self, project: &str, issue: &Issue) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO issues \
             (project, id, issue_title, issue_text, created_by, assigned_to, status_text, \
              open, created_on, updated_on) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(project)
        .bind(&issue.id)
        .bind(&issue.issue_title)
        .bind(&issue.issue_text)
        .bind(&issue.created_by)
        .bind(&issue.assigned_to)
        .bind(&issue.status_text)
        .bind(issue.open)
        .bind(&issue.created_on)
        .bind(&issue.updated_on)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Write back a modified issue. The id and created_on never change.
    pub async fn save(&self, project: &str, issue: &Issue) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE issues SET \
             issue_title = ?, issue_text = ?, created_by = ?, assigned_to = ?, \
             status_text = ?, open = ?, updated_on = ? \
             WHERE project = ? AND id = ?",
        )
        .bind(&issue.issue_title)
        .bind(&issue.issue_text)
        .bind(&issue.created_by)
        .bind(&issue.assigned_to)
        .bind(&issue.status_text)
        .bind(issue.open)
        .bind(&issue.updated_on)
        .bind(project)
        .bind(&issue.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    /// Remove an issue by id within a project.
    pub async fn remove_by_id(&self, project: &str, id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM issues WHERE project = ? AND id = ?")
            .bind(project)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
