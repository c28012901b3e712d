//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! startup:
//!     logging.rs initializes the tracing subscriber
//!     metrics.rs installs the Prometheus exporter (when enabled)
//!
//! per request:
//!     handlers record counters and latency histograms
//! ```

pub mod logging;
pub mod metrics;
