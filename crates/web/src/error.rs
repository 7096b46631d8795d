use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use collector::CollectorError;
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Collector(CollectorError),
    Validation(ValidationErrors),
    Timeout,
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collector(e) => write!(f, "{}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::Timeout => write!(f, "Upstream request timed out"),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Collector(CollectorError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Collector(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
        };

        let body = match &self {
            Self::Collector(CollectorError::NotFound(_)) => {
                json!({
                    "detail": self.to_string()
                })
            }
            Self::Collector(e) => {
                tracing::error!("Collector error: {:?}", e);
                json!({
                    "detail": e.to_string()
                })
            }
            Self::Validation(errors) => {
                let field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            format!(
                                "{}: {}",
                                field,
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            )
                        })
                    })
                    .collect();

                json!({
                    "detail": "Validation failed",
                    "errors": field_errors
                })
            }
            Self::Timeout => {
                tracing::warn!("Request deadline exceeded");
                json!({
                    "detail": self.to_string()
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<CollectorError> for WebError {
    fn from(error: CollectorError) -> Self {
        Self::Collector(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

pub type ApiResult<T> = Result<T, WebError>;
