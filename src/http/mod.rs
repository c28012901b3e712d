//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, method routing)
//!     → api handlers (validate, call store)
//!     → response.rs (fallback for unmatched paths)
//!     → Send to client
//! ```

pub mod response;
pub mod server;

pub use server::HttpServer;
