pub mod api;
pub mod chart;
pub mod downloads;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        // Pages
        .route("/", get(chart::index))
        // API (JSON for the chart and the debt modal)
        .route("/api/chartdata", get(api::chart_data))
        .route("/api/debts", get(api::debts))
        .route("/api/debts/refresh", post(api::refresh_debts))
        // CSV export
        .route("/downloads/:team", get(downloads::team_csv))
        // Health check
        .route("/health", get(health))
}

async fn health() -> &'static str {
    "OK"
}
