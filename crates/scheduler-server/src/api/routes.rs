//! Router, shared state and server startup.

use std::future::Future;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use scheduler_core::clock::Clock;
use scheduler_core::repository::TaskRepository;
use tokio::task::JoinHandle;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::handlers;

/// Shared application state.
pub struct AppState {
    /// Task store
    pub repo: Arc<dyn TaskRepository + Send + Sync>,
    /// Source of "today" for date normalization and completion
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(
        repo: Arc<dyn TaskRepository + Send + Sync>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { repo, clock }
    }
}

/// Builds the API router; unmatched paths are served from `web_dir`.
pub fn router(state: Arc<AppState>, web_dir: &Path) -> Router {
    Router::new()
        .route("/api/nextdate", get(handlers::next_date))
        .route(
            "/api/task",
            get(handlers::get_task)
                .post(handlers::create_task)
                .put(handlers::update_task)
                .delete(handlers::delete_task),
        )
        .route("/api/tasks", get(handlers::list_tasks))
        .route("/api/task/done", post(handlers::complete_task))
        .fallback_service(ServeDir::new(web_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `addr` and serves `app` on a background task until `shutdown`
/// resolves.
///
/// Returns the bound address (useful with port 0) and the serving task,
/// which resolves to the server's exit status.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind to the given address.
pub async fn start_server<F>(
    addr: &str,
    app: Router,
    shutdown: F,
) -> std::io::Result<(SocketAddr, JoinHandle<std::io::Result<()>>)>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let bound_addr = listener.local_addr()?;

    let handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
    });

    Ok((bound_addr, handle))
}

/// Resolves on Ctrl-C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
