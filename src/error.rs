use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Startup validation failures for the static site data.
/// These abort the process before the listener binds.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("social link '{name}' has an empty {field}")]
    EmptySocialField { name: String, field: &'static str },

    #[error("skill '{name}' has an empty linkTitle")]
    EmptySkillTitle { name: String },

    #[error("social link '{name}' has an invalid href: {href}")]
    InvalidHref { name: String, href: String },

    #[error("locale lang must not be empty")]
    EmptyLang,

    #[error("logo is enabled but has zero {dimension}")]
    ZeroLogoDimension { dimension: &'static str },
}
