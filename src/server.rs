use axum::middleware;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error_pages::{error_page_middleware, fallback_handler};
use crate::handlers;
use crate::state::AppState;

/// Assemble the application state and Axum router from a [`Config`]:
/// routes, static file serving, and the full middleware stack.
pub fn build_app(config: Config) -> (AppState, Router) {
    let state = AppState::new(config.clone());

    let app = Router::new()
        .merge(handlers::routes())
        .fallback(fallback_handler)
        .nest_service("/static", ServeDir::new(&config.static_path))
        .layer(middleware::from_fn(error_page_middleware))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    (state, app)
}
