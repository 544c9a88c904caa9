use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("{0}")]
    BodyReadError(#[from] BytesRejection),
    #[error("malformed request body: {0}")]
    MalformedRequest(#[from] serde_json::Error),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("card issuance failed: {0}")]
    IssuanceError(String),
}

// 入力不正も内部エラーも呼び出し側からは区別しない
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(
            error.cause_chain = ?self,
            error.message = %self,
            "Unexpected error happened"
        );

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "status": "error",
                "message": INTERNAL_ERROR_MESSAGE,
            })),
        )
            .into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
