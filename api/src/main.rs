use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;

use account_api::bootstrap::app_context::{AppContext, AppServices};
use account_api::bootstrap::config::Config;
use account_api::infrastructure::db;
use account_api::infrastructure::db::repositories::account_repository_sqlx::SqlxAccountRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "account_api=debug,tower_http=info,axum=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    let pool = db::connect_pool(&cfg).await?;

    // `account-api db-create` drops and recreates the schema, then exits
    if std::env::args().nth(1).as_deref() == Some("db-create") {
        db::recreate_schema(&pool).await?;
        info!("accounts schema recreated");
        return Ok(());
    }

    info!(?cfg, "Starting account service");
    db::initialize_schema(&pool).await?;

    let account_repo = Arc::new(SqlxAccountRepository::new(pool.clone()));
    let ctx = AppContext::new(cfg.clone(), AppServices::new(account_repo));
    let app = account_api::presentation::http::router(ctx);

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    info!(%addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("account service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "failed to listen for shutdown signal");
    }
}
