// Shutdown signal module
//
// Supported signals:
// - SIGTERM: graceful stop
// - SIGINT:  graceful stop (Ctrl+C)
//
// The accept loop stops on the first signal; in-flight connections
// finish in their own tasks.

use crate::logger;

/// Wait for a shutdown signal (Unix)
#[cfg(unix)]
pub async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(s) => s,
        Err(e) => {
            logger::log_error(&format!("Failed to register SIGTERM handler: {e}"));
            // Fall back to Ctrl+C only
            let _ = tokio::signal::ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = sigterm.recv() => {
            logger::log_shutdown("SIGTERM");
        }
        _ = tokio::signal::ctrl_c() => {
            logger::log_shutdown("SIGINT");
        }
    }
}

/// Wait for a shutdown signal (non-Unix: Ctrl+C only)
#[cfg(not(unix))]
pub async fn wait_for_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        logger::log_shutdown("Ctrl+C");
    }
}
