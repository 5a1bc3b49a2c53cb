//! Uniform JSON error envelope for every non-2xx response.

use axum::{
    Json,
    body::to_bytes,
    extract::Request,
    http::{StatusCode, Uri, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::errors::AccountError;

const STORE_FAILURE_MESSAGE: &str = "An internal error occurred";
// Framework-generated error bodies are short plain-text strings
const MAX_FRAMEWORK_BODY: usize = 16 * 1024;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorEnvelope {
    pub status: u16,
    pub error: String,
    pub message: String,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

fn reason(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Error")
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorEnvelope {
            status: self.status.as_u16(),
            error: reason(self.status).to_string(),
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::Validation(e) => {
                tracing::warn!(error = %e, "account_validation_failed");
                ApiError::new(StatusCode::BAD_REQUEST, e.to_string())
            }
            AccountError::UnsupportedMediaType(msg) => {
                tracing::warn!(error = %msg, "account_unsupported_media_type");
                ApiError::new(StatusCode::UNSUPPORTED_MEDIA_TYPE, msg)
            }
            e @ AccountError::NotFound(_) => ApiError::new(StatusCode::NOT_FOUND, e.to_string()),
            AccountError::Store(e) => {
                tracing::error!(error = ?e, "account_store_failed");
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, STORE_FAILURE_MESSAGE)
            }
        }
    }
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::new(
        StatusCode::NOT_FOUND,
        format!("{} was not found on this server", uri.path()),
    )
}

/// Rewrites error responses produced by the router itself (405, path
/// rejections, body limits) into the JSON envelope. Responses that are
/// already JSON pass through untouched.
pub async fn envelope_framework_errors(req: Request, next: Next) -> Response {
    let res = next.run(req).await;
    let status = res.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return res;
    }
    let is_json = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"));
    if is_json {
        return res;
    }

    let (parts, body) = res.into_parts();
    let message = to_bytes(body, MAX_FRAMEWORK_BODY)
        .await
        .ok()
        .map(|b| String::from_utf8_lossy(&b).trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| reason(status).to_string());

    let mut out = ApiError::new(status, message).into_response();
    if let Some(allow) = parts.headers.get(header::ALLOW) {
        out.headers_mut().insert(header::ALLOW, allow.clone());
    }
    out
}
