//! Persistence subsystem.
//!
//! # Data Flow
//! ```text
//! api handlers
//!     → sqlite.rs (IssueStore over a SQLite pool)
//!     → issues table, keyed by (project, id)
//!     → Issue records or StoreError
//! ```
//!
//! # Design Decisions
//! - One table with a `project` column in the key, rather than a
//!   table per project; collections come into existence lazily on
//!   first insert
//! - Single-record atomicity only; no multi-record transactions
//! - Errors are surfaced to the caller as StoreError, never swallowed

pub mod error;
pub mod sqlite;

pub use error::StoreError;
pub use sqlite::IssueStore;
