// Server module - Router assembly and listener setup

use axum::Router;
use axum::http::HeaderValue;
use std::net::{SocketAddr, TcpListener};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::api_docs::ApiDoc;
use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::infrastructure::config::Config;

/// Build the full application: API routes, docs, static page, CORS, tracing
pub fn build_router(state: AppState, config: &Config) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api::api_router(state))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(cors_layer(&config.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// Empty origin list means any origin
fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let mut allowed = Vec::new();
    for origin in origins {
        match origin.parse::<HeaderValue>() {
            Ok(v) => allowed.push(v),
            Err(e) => tracing::error!("Failed to parse CORS origin '{}': {}", origin, e),
        }
    }
    cors.allow_origin(allowed)
}

/// Find an available port starting from the preferred port
pub fn find_available_port(preferred_port: u16) -> Option<u16> {
    // Try preferred port first
    if TcpListener::bind(("0.0.0.0", preferred_port)).is_ok() {
        return Some(preferred_port);
    }

    // Scan next 100 ports
    (preferred_port.saturating_add(1)..preferred_port.saturating_add(100))
        .find(|&port| TcpListener::bind(("0.0.0.0", port)).is_ok())
}

/// Bind and serve until the server stops
pub async fn run(config: Config) -> Result<(), DomainError> {
    let state = AppState::new(&config);
    let app = build_router(state, &config);

    let port = find_available_port(config.port).ok_or_else(|| {
        DomainError::Internal(format!("no free port in {}..+100", config.port))
    })?;
    if port != config.port {
        tracing::warn!(
            "Preferred port {} was not available, using port {} instead",
            config.port,
            port
        );
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| DomainError::Internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server is running on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| DomainError::Internal(format!("HTTP server error: {}", e)))
}
