//! HTTP 服务 - 路由组装与启动

use std::net::SocketAddr;
use std::time::{Duration, Instant};

use axum::{Router, extract::DefaultBodyLimit, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::core::ServerState;
use crate::utils::AppError;

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let start = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::warn!(target: "http_access", %method, %uri, status = status.as_u16(), latency_ms, "request failed");
    } else {
        tracing::info!(target: "http_access", %method, %uri, status = status.as_u16(), latency_ms, "request");
    }

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(crate::api::health::router())
        .merge(crate::api::members::router())
        .merge(crate::api::records::router())
        .merge(crate::api::uploads::router())
        .fallback(crate::api::assets::serve_public_file)
}

/// Build the complete router bound to `state`, with middleware
pub fn build_router(state: ServerState) -> Router {
    let body_limit = state.config.max_body_bytes;

    build_app()
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        // Tower HTTP 中间件
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        // HTTP 请求日志中间件
        .layer(middleware::from_fn(log_request))
}

/// Serve `app` on `0.0.0.0:port` until `shutdown_signal` resolves
pub async fn start_server<F>(
    app: Router,
    port: u16,
    shutdown_timeout: Duration,
    shutdown_signal: F,
) -> Result<(), AppError>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("🚀 Starting HTTP server on http://{}", addr);

    let handle = axum_server::Handle::new();

    // Handle shutdown signal
    let handle_clone = handle.clone();
    tokio::spawn(async move {
        shutdown_signal.await;
        handle_clone.graceful_shutdown(Some(shutdown_timeout));
    });

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
