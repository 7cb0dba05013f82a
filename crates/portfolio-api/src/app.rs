//! Application builder: wires router, middleware and state into an Axum app.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use tower_http::trace::TraceLayer;

use portfolio_core::config::AppConfig;
use portfolio_core::error::AppError;
use portfolio_database::open_store;
use portfolio_service::AuditSink;

use crate::middleware::audit::audit_request;
use crate::middleware::compression::build_compression_layer;
use crate::middleware::context::bind_context;
use crate::middleware::cors::{apply_cors, build_cors_layer};
use crate::middleware::slash::redirect_trailing_slash;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
///
/// Layers run outermost first: trace, audit, CORS, compression, body limit,
/// request context, trailing-slash redirect. Audit must stay outside CORS:
/// preflights are answered there and never reach inner layers.
pub fn build_app(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(&state)
        .layer(middleware::from_fn(redirect_trailing_slash))
        .layer(middleware::from_fn(bind_context))
        .layer(DefaultBodyLimit::max(max_body))
        .layer(build_compression_layer())
        .layer(middleware::from_fn_with_state(cors, apply_cors))
        .layer(middleware::from_fn_with_state(state.clone(), audit_request))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the portfolio server until a shutdown signal arrives.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting portfolio server...");

    // ── Step 1: Open the document store ──────────────────────────
    let store = open_store(&config.database).await?;

    // ── Step 2: Start the audit writer ───────────────────────────
    let (sink, audit_writer) = AuditSink::spawn(&config.audit)?;

    // ── Step 3: Wire application state ───────────────────────────
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, store, sink)?;

    // ── Step 4: Build and start HTTP server ──────────────────────
    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Portfolio server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    // ── Step 5: Drain the audit queue ────────────────────────────
    // The writer exits once the last sink handle (held by the app) is gone.
    match tokio::time::timeout(grace, audit_writer).await {
        Ok(Ok(())) => tracing::info!("Audit writer stopped"),
        Ok(Err(e)) => tracing::error!(error = %e, "Audit writer panicked"),
        Err(_) => tracing::warn!("Audit writer did not stop within {:?}", grace),
    }

    tracing::info!("Portfolio server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
