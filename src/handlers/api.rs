use axum::extract::State;
use axum::response::Json;
use chrono::Local;
use serde::Serialize;

use crate::error::AppResult;
use crate::filters;
use crate::models::{ChartData, DebtRecord};
use crate::services::debts;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DebtSummary {
    pub debts: Vec<DebtView>,
}

#[derive(Debug, Serialize)]
pub struct DebtView {
    pub name: String,
    pub amount: f64,
    pub days: i64,
    pub amount_display: String,
}

impl From<DebtRecord> for DebtView {
    fn from(record: DebtRecord) -> Self {
        Self {
            amount: record.amount_dollars(),
            amount_display: filters::format_usd(record.amount_cents),
            days: record.days,
            name: record.name,
        }
    }
}

/// The validated snapshot, as consumed by external chart clients.
pub async fn chart_data(State(state): State<AppState>) -> AppResult<Json<ChartData>> {
    let data = state.load_chart_data()?;
    Ok(Json(data))
}

/// Debt summary from the on-disk reports, largest debt first.
pub async fn debts(State(state): State<AppState>) -> AppResult<Json<DebtSummary>> {
    let records = debts::load_debt_reports(&state.config.debts_path)?;
    Ok(Json(DebtSummary {
        debts: records.into_iter().map(DebtView::from).collect(),
    }))
}

/// Recompute debt reports from the current snapshot, write them to disk,
/// and return the fresh summary.
pub async fn refresh_debts(State(state): State<AppState>) -> AppResult<Json<DebtSummary>> {
    let data = state.load_chart_data()?;
    let today = Local::now().date_naive();
    let records = debts::calculate_debts(&data, today, &state.config.debt_rates);
    debts::write_debt_reports(&state.config.debts_path, &records)?;

    tracing::info!(report_count = records.len(), "debt reports refreshed");
    Ok(Json(DebtSummary {
        debts: records.into_iter().map(DebtView::from).collect(),
    }))
}
