use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::health::index,
        crate::presentation::http::health::health,
        crate::presentation::http::accounts::list_accounts,
        crate::presentation::http::accounts::create_account,
        crate::presentation::http::accounts::get_account,
        crate::presentation::http::accounts::update_account,
        crate::presentation::http::accounts::delete_account,
    ),
    components(schemas(
        crate::presentation::http::health::HealthResp,
        crate::presentation::http::health::ServiceInfo,
        crate::presentation::http::accounts::Account,
        crate::presentation::http::accounts::AccountRequest,
        crate::presentation::http::error::ErrorEnvelope,
    )),
    tags(
        (name = "Accounts", description = "Customer accounts"),
        (name = "Health", description = "Liveness and service metadata")
    )
)]
pub struct ApiDoc;

pub fn routes() -> Router {
    SwaggerUi::new("/docs")
        .url("/openapi.json", ApiDoc::openapi())
        .into()
}
