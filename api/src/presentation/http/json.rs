use axum::{
    Json,
    async_trait,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::Value;

use crate::application::errors::AccountError;
use crate::domain::accounts::account::AccountDraft;
use crate::domain::accounts::payload::{self, ValidationError};
use crate::presentation::http::error::ApiError;

pub const JSON_CONTENT_TYPE_REQUIRED: &str = "Content-Type must be application/json";

/// Request body extractor yielding a validated [`AccountDraft`].
#[derive(Debug)]
pub struct AccountPayload(pub AccountDraft);

fn classify(rejection: JsonRejection) -> ApiError {
    match rejection.status() {
        StatusCode::UNSUPPORTED_MEDIA_TYPE => {
            AccountError::UnsupportedMediaType(JSON_CONTENT_TYPE_REQUIRED.into()).into()
        }
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            AccountError::Validation(ValidationError(rejection.body_text())).into()
        }
        other => ApiError::new(other, rejection.body_text()),
    }
}

#[async_trait]
impl<S> FromRequest<S> for AccountPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(classify)?;
        let draft = payload::deserialize(&value).map_err(AccountError::from)?;
        Ok(Self(draft))
    }
}
