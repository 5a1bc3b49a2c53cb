use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::bootstrap::app_context::AppContext;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResp {
    pub status: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    pub name: String,
    pub version: &'static str,
    pub paths: &'static str,
}

// Liveness only; the store is deliberately not consulted
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, body = HealthResp))
)]
pub async fn health() -> Json<HealthResp> {
    Json(HealthResp { status: "OK" })
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses((status = 200, body = ServiceInfo))
)]
pub async fn index(State(ctx): State<AppContext>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: ctx.cfg.service_name.clone(),
        version: env!("CARGO_PKG_VERSION"),
        paths: "/accounts",
    })
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .with_state(ctx)
}
