use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use food_client::UsdaError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Upstream(#[from] UsdaError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let code = self.error_code();

        tracing::error!(error = %self, upstream_status = ?self.upstream_status(), "request failed");
        let body = Json(ErrorBody {
            error: self.to_string(),
        });

        (code, body).into_response()
    }
}

impl AppError {
    // Upstream status codes are not propagated, every failure is a 500.
    fn error_code(&self) -> StatusCode {
        match self {
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn upstream_status(&self) -> Option<u16> {
        match self {
            AppError::Upstream(err) => err.status(),
        }
    }
}
