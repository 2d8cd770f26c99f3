// Signal handling module
//
// Supported signals:
// - SIGINT:  Graceful shutdown (Ctrl+C)
// - SIGTERM: Graceful shutdown (Unix only)

use crate::logger;

/// Resolves once the operator asks the server to stop.
///
/// If a handler cannot be registered the error is logged and that signal
/// is never reported; the other one still works.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            logger::log_error(&format!("Failed to listen for Ctrl+C: {e}"));
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        () = ctrl_c => println!("\n[SIGNAL] SIGINT received (Ctrl+C)"),
        () = terminate() => println!("\n[SIGNAL] SIGTERM received"),
    }
}

#[cfg(unix)]
async fn terminate() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            logger::log_error(&format!("Failed to register SIGTERM handler: {e}"));
            std::future::pending::<()>().await;
        }
    }
}

/// Windows fallback - only Ctrl+C is supported
#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}
