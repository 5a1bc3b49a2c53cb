use axum::{Router, extract::MatchedPath, middleware};
use http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::config::Config;

pub mod accounts;
pub mod error;
pub mod health;
pub mod json;
pub mod openapi;

fn cors(cfg: &Config) -> CorsLayer {
    let origin = match cfg.frontend_url.as_deref().map(HeaderValue::from_str) {
        Some(Ok(v)) => AllowOrigin::exact(v),
        Some(Err(_)) => {
            tracing::warn!(origin = ?cfg.frontend_url, "invalid_frontend_url_mirroring_origin");
            AllowOrigin::mirror_request()
        }
        None => AllowOrigin::mirror_request(),
    };
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
}

/// Full HTTP surface of the service.
pub fn router(ctx: AppContext) -> Router {
    let cors = cors(&ctx.cfg);
    Router::new()
        .merge(health::routes(ctx.clone()))
        .merge(accounts::routes(ctx))
        .merge(openapi::routes())
        .fallback(error::not_found)
        .layer(middleware::from_fn(error::envelope_framework_errors))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        )
}
