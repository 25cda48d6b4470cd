use crate::signaling::{SignalingService, ws_handler};
use axum::{Router, routing::get};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Builds the HTTP surface: the signaling socket at `/ws`, the two role
/// pages, and everything else under `public_dir` as static files.
pub fn router(service: SignalingService, public_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ws", get(ws_handler))
        .route_service("/", ServeFile::new(public_dir.join("index.html")))
        .route_service("/phone", ServeFile::new(public_dir.join("phone.html")))
        .fallback_service(ServeDir::new(public_dir))
        .layer(cors)
        .with_state(service)
}
