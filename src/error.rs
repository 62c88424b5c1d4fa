use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

use crate::error_pages::ErrorMessage;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::CsvParse(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Io(e) => {
                tracing::error!("IO error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to load chart data".to_string(),
                )
            }
            AppError::Json(e) => {
                tracing::error!("JSON error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to load chart data".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        let mut response = (status, Json(json!({ "error": message }))).into_response();
        response.extensions_mut().insert(ErrorMessage(message));
        response
    }
}

pub type AppResult<T> = Result<T, AppError>;

pub trait RenderHtml {
    fn render_html(self) -> AppResult<Html<String>>;
}

impl<T: Template> RenderHtml for T {
    fn render_html(self) -> AppResult<Html<String>> {
        self.render()
            .map(Html)
            .map_err(|e| AppError::Internal(format!("Template error: {}", e)))
    }
}
