//! Server lifecycle: listener startup, signal handling, bounded drain.
//!
//! The listener runs on its own task while this module blocks on the
//! first of {listener terminated, termination signal}. A signal starts
//! the drain: the listener stops accepting and in-flight requests get
//! until the configured grace period to finish, after which remaining
//! connections are forcibly closed. A listener that terminates on its
//! own is always fatal.

use std::future::Future;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;

use userhub_core::config::ServerConfig;
use userhub_core::error::{AppError, ErrorKind};
use userhub_core::result::AppResult;

/// Bind the configured address and serve until shutdown.
///
/// Returns `Err` on bind failure or unexpected listener termination;
/// the caller decides the process exit code.
pub async fn serve(config: &ServerConfig, app: Router) -> AppResult<()> {
    let addr = config.listen_address();
    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Internal,
            format!("Failed to bind {addr}: {e}"),
            e,
        )
    })?;

    tracing::info!("UserHub server listening on {addr}");

    run(
        listener,
        app,
        Duration::from_secs(config.shutdown_grace_seconds),
        shutdown_signal(),
    )
    .await
}

/// Serve on a spawned task and race its termination against the
/// shutdown trigger. First event wins; there is no polling loop, both
/// sources are awaited simultaneously.
async fn run(
    listener: TcpListener,
    app: Router,
    grace: Duration,
    shutdown: impl Future<Output = ()>,
) -> AppResult<()> {
    let (drain_tx, mut drain_rx) = watch::channel(false);

    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = drain_rx.changed().await;
            })
            .await
    });

    tokio::select! {
        // The listener terminated without being asked to; always fatal.
        result = &mut server => {
            let cause = match result {
                Ok(Ok(())) => "listener stopped unexpectedly".to_string(),
                Ok(Err(e)) => e.to_string(),
                Err(e) => e.to_string(),
            };
            Err(AppError::internal(format!("Server terminated unexpectedly: {cause}")))
        }
        // Termination signal: stop accepting, drain in-flight work.
        _ = shutdown => {
            tracing::info!("Shutdown signal received, draining connections");
            let _ = drain_tx.send(true);

            match tokio::time::timeout(grace, &mut server).await {
                Ok(Ok(Ok(()))) => {
                    tracing::info!("Server gracefully stopped");
                    Ok(())
                }
                Ok(Ok(Err(e))) => {
                    Err(AppError::internal(format!("Server error during drain: {e}")))
                }
                Ok(Err(e)) => Err(AppError::internal(format!("Server task failed: {e}"))),
                Err(_) => {
                    // Deadline elapsed with requests still in flight.
                    server.abort();
                    tracing::warn!(
                        grace_seconds = grace.as_secs(),
                        "Graceful shutdown timed out, forcing close"
                    );
                    Ok(())
                }
            }
        }
    }
}

/// Wait for a termination signal (Ctrl+C/SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
