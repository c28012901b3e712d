//! Issue Tracker HTTP API
//!
//! A small issue-tracking CRUD service built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                ISSUE TRACKER                  │
//!                    │                                               │
//!  Client Request    │  ┌─────────┐    ┌──────────┐    ┌─────────┐  │
//!  ──────────────────┼─▶│  http   │───▶│   api    │───▶│  store  │──┼──▶ SQLite
//!                    │  │ server  │    │ handlers │    │ adapter │  │
//!  Client Response   │  └─────────┘    └──────────┘    └─────────┘  │
//!  ◀─────────────────┼───────┘                                      │
//!                    │                                               │
//!                    │  ┌─────────────────────────────────────────┐  │
//!                    │  │          Cross-Cutting Concerns          │  │
//!                    │  │  ┌────────┐ ┌────────────┐ ┌──────────┐ │  │
//!                    │  │  │ config │ │observability│ │lifecycle │ │  │
//!                    │  │  └────────┘ └────────────┘ └──────────┘ │  │
//!                    │  └─────────────────────────────────────────┘  │
//!                    └──────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod api;
pub mod config;
pub mod http;
pub mod model;
pub mod store;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::schema::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use model::Issue;
pub use store::IssueStore;
