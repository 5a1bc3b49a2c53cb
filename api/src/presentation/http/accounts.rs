use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::application::use_cases::accounts::create_account::CreateAccount;
use crate::application::use_cases::accounts::delete_account::DeleteAccount;
use crate::application::use_cases::accounts::get_account::GetAccount;
use crate::application::use_cases::accounts::list_accounts::ListAccounts;
use crate::application::use_cases::accounts::update_account::UpdateAccount;
use crate::bootstrap::app_context::AppContext;
use crate::domain::accounts::payload;
use crate::presentation::http::error::ApiError;
use crate::presentation::http::json::AccountPayload;

pub const ACCOUNTS_PATH: &str = "/accounts";

// Documentation-only shapes; bodies are produced and checked by `payload`
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: Option<String>,
    pub date_joined: chrono::NaiveDate,
}

#[allow(dead_code)]
#[derive(Deserialize, ToSchema)]
pub struct AccountRequest {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: Option<String>,
    pub date_joined: Option<chrono::NaiveDate>,
}

pub fn location_of(id: i64) -> String {
    format!("{ACCOUNTS_PATH}/{id}")
}

#[utoipa::path(post, path = "/accounts", tag = "Accounts", request_body = AccountRequest,
    responses(
        (status = 201, body = Account, headers(("Location" = String, description = "URL of the new account"))),
        (status = 400, body = ErrorEnvelope),
        (status = 415, body = ErrorEnvelope)
    ))]
pub async fn create_account(
    State(ctx): State<AppContext>,
    AccountPayload(draft): AccountPayload,
) -> Result<impl IntoResponse, ApiError> {
    let repo = ctx.account_repo();
    let uc = CreateAccount {
        repo: repo.as_ref(),
    };
    let account = uc.execute(draft).await?;
    tracing::info!(account_id = account.id, "account_created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location_of(account.id))],
        Json(payload::serialize(&account)),
    ))
}

#[utoipa::path(get, path = "/accounts", tag = "Accounts",
    responses((status = 200, body = [Account])))]
pub async fn list_accounts(State(ctx): State<AppContext>) -> Result<Json<Vec<Value>>, ApiError> {
    let repo = ctx.account_repo();
    let uc = ListAccounts {
        repo: repo.as_ref(),
    };
    let accounts = uc.execute().await?;
    tracing::debug!(count = accounts.len(), "accounts_listed");
    Ok(Json(accounts.iter().map(payload::serialize).collect()))
}

#[utoipa::path(get, path = "/accounts/{id}", tag = "Accounts",
    params(("id" = i64, Path, description = "Account ID")),
    responses((status = 200, body = Account), (status = 404, body = ErrorEnvelope)))]
pub async fn get_account(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let repo = ctx.account_repo();
    let uc = GetAccount {
        repo: repo.as_ref(),
    };
    let account = uc.execute(id).await?;
    Ok(Json(payload::serialize(&account)))
}

#[utoipa::path(put, path = "/accounts/{id}", tag = "Accounts", request_body = AccountRequest,
    params(("id" = i64, Path, description = "Account ID")),
    responses(
        (status = 200, body = Account),
        (status = 400, body = ErrorEnvelope),
        (status = 404, body = ErrorEnvelope),
        (status = 415, body = ErrorEnvelope)
    ))]
pub async fn update_account(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
    AccountPayload(draft): AccountPayload,
) -> Result<Json<Value>, ApiError> {
    let repo = ctx.account_repo();
    let uc = UpdateAccount {
        repo: repo.as_ref(),
    };
    let account = uc.execute(id, draft).await?;
    tracing::info!(account_id = account.id, "account_updated");
    Ok(Json(payload::serialize(&account)))
}

#[utoipa::path(delete, path = "/accounts/{id}", tag = "Accounts",
    params(("id" = i64, Path, description = "Account ID")),
    responses((status = 204)))]
pub async fn delete_account(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = ctx.account_repo();
    let uc = DeleteAccount {
        repo: repo.as_ref(),
    };
    if uc.execute(id).await? {
        tracing::info!(account_id = id, "account_deleted");
    }
    Ok(StatusCode::NO_CONTENT)
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/accounts", get(list_accounts).post(create_account))
        .route(
            "/accounts/:id",
            get(get_account).put(update_account).delete(delete_account),
        )
        .with_state(ctx)
}
