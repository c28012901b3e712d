//! Issue CRUD API subsystem.
//!
//! # Data Flow
//! ```text
//! axum method routing on /api/issues/{project}
//!     → handlers.rs (validate input, resolve project)
//!     → store (keyed collection operations)
//!     → JSON response (types.rs payloads)
//! ```
//!
//! # Design Decisions
//! - Validation failures respond with HTTP 200 and a structured `error`
//!   body field; clients inspect the body, not the status (the API's
//!   long-standing convention)
//! - Every handler short-circuits on validation failure before touching
//!   the store
//! - Query-parameter filtering is conjunctive over stringified fields

pub mod handlers;
pub mod types;
