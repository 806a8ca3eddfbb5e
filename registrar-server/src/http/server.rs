//! Axum server setup
//!
//! Server skeleton with:
//! - Localhost-only CORS by default
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;

use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::state::AppState;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:3030)
    pub bind_addr: SocketAddr,

    /// Allow permissive CORS (default: false = localhost only)
    ///
    /// WARNING: Setting this to true allows any origin.
    /// Only use for development or documented use cases.
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3030)),
            cors_permissive: false,
        }
    }
}

/// Build the application router with all routes
pub fn build_router(state: AppState, cors_permissive: bool) -> Router {
    let cors = if cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        CorsLayer::permissive()
    } else {
        // Localhost only
        CorsLayer::new()
            .allow_origin([
                "http://localhost:3000".parse().unwrap(),
                "http://localhost:3030".parse().unwrap(),
                "http://127.0.0.1:3000".parse().unwrap(),
                "http://127.0.0.1:3030".parse().unwrap(),
            ])
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(routes::health::router())
        .merge(routes::users::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url).await?;
/// let config = ServerConfig::default();
/// run_server(pool, config).await?;
/// ```
pub async fn run_server(pool: PgPool, config: ServerConfig) -> Result<(), ServerError> {
    let state = AppState::new(pool);
    let app = build_router(state, config.cors_permissive);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    // A lazy pool never connects until a query runs, so routes that
    // fail before storage can be exercised without a database.
    fn lazy_state() -> AppState {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/registrar")
            .expect("lazy pool");
        AppState::new(pool)
    }

    fn post_users(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/users")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .expect("request")
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 3030);
        assert!(!config.cors_permissive);
    }

    #[tokio::test]
    async fn health_route_responds() {
        let app = build_router(lazy_state(), false);
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_field_is_rejected_before_storage() {
        let app = build_router(lazy_state(), false);
        let response = app
            .oneshot(post_users(
                r#"{"name":"Bob","email":"b@x.com","date_of_birth":"1985-05-05"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "validation_error");
    }

    #[tokio::test]
    async fn unparseable_date_is_rejected_before_storage() {
        let app = build_router(lazy_state(), false);
        let response = app
            .oneshot(post_users(
                r#"{"name":"Bob","identity_number":"ID2","email":"b@x.com","date_of_birth":"not-a-date"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn empty_email_is_rejected_before_storage() {
        let app = build_router(lazy_state(), false);
        let response = app
            .oneshot(post_users(
                r#"{"name":"Bob","identity_number":"ID2","email":"","date_of_birth":"1985-05-05"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // End-to-end scenarios against a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p registrar-server -- --ignored

    async fn db_state() -> AppState {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");
        crate::db::migrations::run(&pool).await.expect("migrations failed");
        sqlx::query("TRUNCATE users RESTART IDENTITY")
            .execute(&pool)
            .await
            .expect("truncate failed");
        AppState::new(pool)
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_resubmit_then_invalid() {
        let state = db_state().await;
        let alice =
            r#"{"name":"Alice","identity_number":"ID1","email":"a@x.com","date_of_birth":"1990-01-01"}"#;

        // First submission: 201 with id 1 and all fields echoed
        let response = build_router(state.clone(), false)
            .oneshot(post_users(alice))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Alice");
        assert_eq!(json["identity_number"], "ID1");
        assert_eq!(json["email"], "a@x.com");
        assert_eq!(json["date_of_birth"], "1990-01-01");

        // Same payload again: conflict, still one row
        let response = build_router(state.clone(), false)
            .oneshot(post_users(alice))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(state.pool())
            .await
            .unwrap();
        assert_eq!(count.0, 1);

        // Missing identity_number: validation error, still one row
        let response = build_router(state.clone(), false)
            .oneshot(post_users(
                r#"{"name":"Bob","email":"b@x.com","date_of_birth":"1985-05-05"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(state.pool())
            .await
            .unwrap();
        assert_eq!(count.0, 1);
    }
}
