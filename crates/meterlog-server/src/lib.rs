//! Meterlog Web Server
//!
//! Axum-based REST API over the meterlog core library:
//! - Reading CRUD with consumption deltas
//! - Gap-fill suggestions and commits
//! - Chart data for the frontend
//!
//! Designed to sit on a home network; there is no authentication layer.
//! Error responses are sanitized, internal causes go to the log only.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{error, info};

use meterlog_core::db::Database;
use meterlog_core::Error as CoreError;

mod handlers;

/// Maximum pagination limit for reading listings
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Default page size, matching the gap-fill scan window
pub const DEFAULT_PAGE_LIMIT: i64 = 12;

/// Server configuration
#[derive(Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
}

/// Shared application state
pub struct AppState {
    pub db: Database,
}

/// GET /health - liveness probe for container orchestration
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Create the application router
pub fn create_router(db: Database, static_dir: Option<&str>, config: ServerConfig) -> Router {
    let state = Arc::new(AppState { db });

    let api_routes = Router::new()
        // Readings
        .route(
            "/readings",
            get(handlers::list_readings).post(handlers::create_reading),
        )
        .route("/readings/count", get(handlers::count_readings))
        .route(
            "/readings/:id",
            get(handlers::get_reading)
                .put(handlers::update_reading)
                .delete(handlers::delete_reading),
        )
        // Gap filling
        .route("/gaps/suggestions", get(handlers::list_suggestions))
        .route("/gaps/fill", post(handlers::fill_all))
        .route("/gaps/fill-one", post(handlers::fill_one))
        // Charts
        .route("/charts/data", get(handlers::chart_data))
        .route("/charts/yoy", get(handlers::year_over_year))
        .route("/charts/summary", get(handlers::chart_summary));

    // Build CORS layer
    let cors = if config.allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        CorsLayer::new()
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE])
    } else {
        // Allow specified origins
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE])
    };

    let mut app = Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Serve static files if directory provided
    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app
}

/// Start the server
pub async fn serve(
    db: Database,
    host: &str,
    port: u16,
    static_dir: Option<&str>,
    config: ServerConfig,
) -> anyhow::Result<()> {
    let app = create_router(db, static_dir, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn not_found(msg: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn conflict(msg: &str) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: msg.to_string(),
            internal: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidReading(msg) => Self::bad_request(&msg),
            CoreError::Conflict(msg) => Self::conflict(&msg),
            CoreError::NotFound(msg) => Self::not_found(&msg),
            // Storage and serialization failures: generic message to the
            // client, full error to the log
            other => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "An internal error occurred".to_string(),
                internal: Some(other.into()),
            },
        }
    }
}
