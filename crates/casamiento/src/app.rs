use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    handlers::{
        confirm::confirm,
        health::health,
        pages::{confirmaciones, index},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let images_dir = state.config.images_dir.clone();

    Router::new()
        .route("/", get(index))
        .route("/confirmaciones", get(confirmaciones))
        .route("/health", get(health))
        .route("/api/confirm", post(confirm))
        .nest_service("/images", ServeDir::new(images_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
