use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Export one team's payment history as a CSV attachment.
pub async fn team_csv(
    State(state): State<AppState>,
    Path(team): Path<String>,
) -> AppResult<Response> {
    if !state.config.is_downloadable(&team) {
        return Err(AppError::NotFound(format!("No download for team: {}", team)));
    }

    let data = state.load_chart_data()?;
    let payments = data
        .teams
        .get(&team)
        .ok_or_else(|| AppError::NotFound(format!("Unknown team: {}", team)))?;

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["startDate", "endDate", "link"])
        .map_err(|e| AppError::Internal(format!("CSV export failed: {}", e)))?;
    for payment in payments {
        writer
            .write_record([
                payment.start.to_string(),
                payment.end.to_string(),
                payment.link.clone().unwrap_or_default(),
            ])
            .map_err(|e| AppError::Internal(format!("CSV export failed: {}", e)))?;
    }

    let body = writer
        .into_inner()
        .map_err(|e| AppError::Internal(format!("CSV export failed: {}", e)))?;

    tracing::debug!(team = %team, rows = payments.len(), "team CSV exported");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}.csv\"", sanitize_filename(&team)),
            ),
        ],
        body,
    )
        .into_response())
}

/// Strip characters that are illegal in filenames on common filesystems.
fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            other => other,
        })
        .collect();
    let cleaned = cleaned.trim_end_matches(['.', ' ']).to_string();

    if cleaned.is_empty() {
        "unnamed".into()
    } else {
        cleaned
    }
}
