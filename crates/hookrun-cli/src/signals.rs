// Rust guideline compliant 2026-02-09

//! Interrupt handling.
//!
//! A background thread runs a single-threaded tokio runtime that waits for
//! SIGINT or SIGTERM (ctrl-c elsewhere) and fires the run's cancel token.

use hookrun_core::CancelToken;
use std::io;
use std::thread;

/// Starts the listener thread that cancels `token` on interrupt.
///
/// # Errors
///
/// Returns an error if the runtime or the thread cannot be created.
pub fn install_interrupt_handler(token: CancelToken) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    thread::Builder::new()
        .name("hookrun-signals".to_string())
        .spawn(move || {
            runtime.block_on(async move {
                wait_for_interrupt().await;
                tracing::warn!("interrupt received, stopping run");
                token.cancel();
            });
        })?;

    Ok(())
}

async fn wait_for_interrupt() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        if let (Ok(mut sigint), Ok(mut sigterm)) = (
            signal(SignalKind::interrupt()),
            signal(SignalKind::terminate()),
        ) {
            tokio::select! {
                _ = sigint.recv() => {}
                _ = sigterm.recv() => {}
            }
            return;
        }
    }
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
