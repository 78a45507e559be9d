use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Message used when an upstream failure carries no message of its own.
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(anyhow::Error),

    #[error("Not found: {0}")]
    NotFound(anyhow::Error),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    /// A call to an external collaborator failed. Rendered with the upstream
    /// message so clients can surface it.
    #[error("Upstream error: {0}")]
    UpstreamError(String),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(rename = "statusCode", skip_serializing_if = "Option::is_none")]
    status_code: Option<u16>,
}

impl ErrorResponse {
    fn plain(error: String) -> Self {
        Self {
            message: None,
            error,
            details: None,
            status_code: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(err) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::plain(err.to_string()))
            }
            AppError::NotFound(err) => (StatusCode::NOT_FOUND, ErrorResponse::plain(err.to_string())),
            AppError::InternalError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    details: Some(format!("{:#}", err)),
                    ..ErrorResponse::plain("Internal server error".to_string())
                },
            ),
            AppError::UpstreamError(msg) => {
                let message = if msg.is_empty() {
                    INTERNAL_SERVER_ERROR.to_string()
                } else {
                    msg
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        message: Some(message),
                        status_code: Some(StatusCode::INTERNAL_SERVER_ERROR.as_u16()),
                        ..ErrorResponse::plain(INTERNAL_SERVER_ERROR.to_string())
                    },
                )
            }
            AppError::ConfigError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::plain(err.to_string()),
            ),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::Value;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body should be readable")
            .to_bytes();
        (status, serde_json::from_slice(&bytes).expect("body should be JSON"))
    }

    #[tokio::test]
    async fn bad_request_renders_error_only() {
        let (status, body) = render(AppError::BadRequest(anyhow::anyhow!("Message is required"))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "error": "Message is required" }));
    }

    #[tokio::test]
    async fn config_error_keeps_its_message() {
        let (status, body) =
            render(AppError::ConfigError(anyhow::anyhow!("Gemini API key not configured"))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Gemini API key not configured");
        assert!(body.get("statusCode").is_none());
    }

    #[tokio::test]
    async fn upstream_error_carries_message_and_status_code() {
        let (status, body) = render(AppError::UpstreamError("quota exceeded".to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            serde_json::json!({
                "message": "quota exceeded",
                "error": "Internal Server Error",
                "statusCode": 500
            })
        );
    }

    #[tokio::test]
    async fn empty_upstream_message_falls_back_to_default() {
        let (_, body) = render(AppError::UpstreamError(String::new())).await;

        assert_eq!(body["message"], "Internal Server Error");
    }
}
