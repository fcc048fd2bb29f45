use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use reporting::ReportingError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Submitted value '{0}' is not a valid date of format '%Y-%m-%d'")]
    InvalidDate(String),
    #[error("Reporting error: {0}")]
    Reporting(#[from] ReportingError),
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InvalidDate(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Reporting(ReportingError::SummaryNotAvailable(date)) => {
                (StatusCode::NOT_FOUND, format!("No orders at date: '{date}'"))
            }
            AppError::Reporting(reporting_err) => {
                tracing::error!(error = ?reporting_err, "Reporting error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal reporting error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
