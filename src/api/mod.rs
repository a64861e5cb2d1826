use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::gnews::GNewsClient;

pub mod errors;
pub mod handlers;
pub mod models;

pub fn create_router(client: Arc<GNewsClient>, static_dir: &str) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // API routes
        .route("/api/search", get(handlers::search_handler))
        .route("/api/top-headlines", get(handlers::top_headlines_handler))
        .route("/api/categories", get(handlers::categories_handler))
        .with_state(client)
        // Static file serving for the UI
        .nest_service("/", ServeDir::new(static_dir))
        .layer(cors)
}
