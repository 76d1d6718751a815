use crate::handlers::{self, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::{path::Path, sync::Arc};
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Build the application router around `state`
pub fn router(state: Arc<AppState>, static_dir: &Path) -> Router {
    Router::new()
        // Page routes
        .route("/", get(handlers::home_page))
        .route("/login", get(handlers::login_page).post(handlers::login))
        // API routes
        .route("/api/login", post(handlers::login_api))
        .route("/api/portal", get(handlers::portal_content))
        .route("/health", get(handlers::health))
        // Static files
        .nest_service("/static", ServeDir::new(static_dir))
        // State and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
