use axum::{extract::State, http::Method, routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::sentiment::service::SentimentService;
use crate::server::config::ServerConfig;

pub mod error;
pub mod models;
pub mod routes;

pub use error::AppError;

pub struct AppState {
    pub db: DatabaseConnection,
    pub sentiment: Arc<SentimentService>,
    pub config: Arc<ServerConfig>,
}

async fn health_check_handler(State(app_state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let database = match app_state.db.ping().await {
        Ok(()) => serde_json::json!({ "status": "UP" }),
        Err(e) => serde_json::json!({ "status": "DOWN", "error": e.to_string() }),
    };

    let status = if database["status"] == "UP" { "UP" } else { "DOWN" };
    Json(serde_json::json!({
        "status": status,
        "timestamp": chrono::Utc::now().timestamp_millis(),
        "database": database,
    }))
}

pub fn create_axum_router(
    db: DatabaseConnection,
    sentiment: Arc<SentimentService>,
    config: Arc<ServerConfig>,
) -> Router {
    let app_state = Arc::new(AppState {
        db,
        sentiment,
        config,
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health_check_handler))
        .nest("/api/entries", routes::entry_routes::entries_router())
        .with_state(app_state)
        .layer(cors)
}
