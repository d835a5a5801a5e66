//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::response::{ErrorsBody, MessageBody};

/// Field name -> validation messages, in rule order per field.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

pub const NOT_FOUND_MESSAGE: &str = "No Such Record Found!";
pub const EMPTY_RESULT_MESSAGE: &str = "No Records Found";
pub const PERSISTENCE_MESSAGE: &str = "Something Went Wrong";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidVar { var: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(FieldErrors),
    #[error("no record with id {0}")]
    NotFound(String),
    #[error("no records")]
    EmptyResult,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("persistence: {0}")]
    Persistence(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    /// A body extractor refused the request; carries the extractor's own status.
    #[error("rejected ({0}): {1}")]
    Rejected(StatusCode, String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) | AppError::EmptyResult => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Rejected(status, _) => *status,
            AppError::Db(_) | AppError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let message = match self {
            AppError::Validation(errors) => {
                return (
                    status,
                    Json(ErrorsBody {
                        status: status.as_u16(),
                        errors,
                    }),
                )
                    .into_response();
            }
            AppError::NotFound(_) => NOT_FOUND_MESSAGE.to_string(),
            AppError::EmptyResult => EMPTY_RESULT_MESSAGE.to_string(),
            AppError::BadRequest(msg) | AppError::Rejected(_, msg) => msg,
            AppError::Db(_) | AppError::Persistence(_) => PERSISTENCE_MESSAGE.to_string(),
        };
        (
            status,
            Json(MessageBody {
                status: status.as_u16(),
                message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(
            AppError::Validation(FieldErrors::new()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(AppError::NotFound("7".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::EmptyResult.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Db(sqlx::Error::PoolTimedOut).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(AppError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Rejected(StatusCode::PAYLOAD_TOO_LARGE, "x".into()).status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }

    #[tokio::test]
    async fn rejection_keeps_extractor_status_in_body() {
        let resp = AppError::Rejected(StatusCode::PAYLOAD_TOO_LARGE, "length limit exceeded".into())
            .into_response();
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "status": 413, "message": "length limit exceeded" })
        );
    }

    #[tokio::test]
    async fn db_error_detail_is_not_exposed() {
        let resp = AppError::Persistence("connection reset by peer".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "status": 500, "message": "Something Went Wrong" }));
    }

    #[tokio::test]
    async fn validation_error_renders_errors_map() {
        let mut errors = FieldErrors::new();
        errors.insert("phone".into(), vec!["The phone must be 10 digits.".into()]);
        let resp = AppError::Validation(errors).into_response();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], 422);
        assert_eq!(body["errors"]["phone"][0], "The phone must be 10 digits.");
        assert!(body.get("message").is_none());
    }
}
