// HTTP router assembly

use std::time::Duration;

use axum::routing::{get, Router};
use http::{header, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{diagnose_database, read_root, test_database, test_redis, SharedState};

/// Builds the API router over the shared state
pub fn build_router(state: SharedState) -> Router {
    // Configure CORS policy
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
        .expose_headers([header::CONTENT_TYPE, header::CONTENT_LENGTH])
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/", get(read_root))
        .route("/test-redis", get(test_redis))
        .route("/test-database", get(test_database))
        .route("/diagnose", get(diagnose_database))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use sea_orm::{ConnectOptions, Database, DatabaseConnection};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::cache::RedisStore;
    use crate::config::ApiConfig;
    use crate::db::DbPool;
    use crate::entity::tests::migrated_db;
    use crate::handlers::AppState;

    // Nothing listens on port 1
    const UNREACHABLE_REDIS: &str = "redis://127.0.0.1:1/0";

    fn state_with(db: DatabaseConnection, redis_url: &str) -> SharedState {
        let mut config = ApiConfig::from_lookup(|_| None);
        config.redis_url = redis_url.to_string();
        config.redis_timeout = Duration::from_secs(2);

        Arc::new(AppState {
            db: DbPool::from_connection(db),
            cache: RedisStore::new(&config).unwrap(),
        })
    }

    async fn memory_db() -> DatabaseConnection {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1).min_connections(1).sqlx_logging(false);
        Database::connect(opts).await.unwrap()
    }

    async fn get_json(state: SharedState, uri: &str) -> (StatusCode, Value) {
        let response = build_router(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_root_ignores_store_availability() {
        let state = state_with(DatabaseConnection::Disconnected, UNREACHABLE_REDIS);
        let (status, body) = get_json(state, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Rosalie AI Assistant is running!");
    }

    #[tokio::test]
    async fn test_redis_unreachable_reports_error() {
        let state = state_with(memory_db().await, UNREACHABLE_REDIS);
        let (status, body) = get_json(state, "/test-redis").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["redis_status"], "error");
        assert!(!body["message"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    #[ignore = "requires a Redis server at REDIS_URL"]
    async fn test_redis_round_trip() {
        let config = ApiConfig::from_env();
        let state = state_with(memory_db().await, &config.redis_url);
        let (status, body) = get_json(state, "/test-redis").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["redis_status"], "success");
        assert_eq!(body["message"], "Rosalie is working!");
    }

    #[tokio::test]
    async fn test_database_success() {
        let state = state_with(memory_db().await, UNREACHABLE_REDIS);
        let (status, body) = get_json(state, "/test-database").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["database_status"], "success");
        assert_eq!(body["message"], "Database connection working");
    }

    #[tokio::test]
    async fn test_database_unavailable() {
        let state = state_with(DatabaseConnection::Disconnected, UNREACHABLE_REDIS);
        let (status, body) = get_json(state, "/test-database").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["database_status"], "error");
        assert!(!body["message"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_diagnose_counts_every_table() {
        let state = state_with(migrated_db().await, UNREACHABLE_REDIS);
        let (status, body) = get_json(state, "/diagnose").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["backend"], "SQLite");

        let tables = body["tables"].as_array().unwrap();
        let names: Vec<&str> = tables
            .iter()
            .map(|t| t["table"].as_str().unwrap())
            .collect();
        assert_eq!(names, migration::TABLES);
        assert!(tables.iter().all(|t| t["rows"] == 0));
    }

    #[tokio::test]
    async fn test_diagnose_without_schema_fails() {
        let state = state_with(memory_db().await, UNREACHABLE_REDIS);
        let (status, body) = get_json(state, "/diagnose").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["database_status"], "error");
    }
}
