//! OS signal handling.
//!
//! # Responsibilities
//! - Register the Ctrl+C handler (async-safe via Tokio)
//! - Translate the signal into the internal shutdown event

use crate::lifecycle::shutdown::Shutdown;

/// Wait for Ctrl+C and trigger graceful shutdown.
pub async fn listen(shutdown: Shutdown) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        return;
    }
    shutdown.trigger();
}
