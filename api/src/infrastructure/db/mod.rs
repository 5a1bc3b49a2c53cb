use sqlx::{Pool, Postgres};

use crate::bootstrap::config::Config;

pub type PgPool = Pool<Postgres>;

const CREATE_ACCOUNTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    id           BIGSERIAL PRIMARY KEY,
    name         VARCHAR(64)  NOT NULL CHECK (btrim(name) <> ''),
    email        VARCHAR(64)  NOT NULL CHECK (btrim(email) <> ''),
    address      VARCHAR(256) NOT NULL CHECK (btrim(address) <> ''),
    phone_number VARCHAR(32),
    date_joined  DATE NOT NULL DEFAULT CURRENT_DATE
)"#;

pub async fn connect_pool(cfg: &Config) -> anyhow::Result<PgPool> {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(cfg.database_max_connections)
        .connect(&cfg.database_url())
        .await?;
    Ok(pool)
}

/// Creates the accounts table when it is missing. Safe to call on every start.
pub async fn initialize_schema(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::query(CREATE_ACCOUNTS_TABLE).execute(pool).await?;
    Ok(())
}

/// Drops and recreates the accounts table, discarding every row.
pub async fn recreate_schema(pool: &PgPool) -> anyhow::Result<()> {
    let mut tx = pool.begin().await?;
    sqlx::query("DROP TABLE IF EXISTS accounts")
        .execute(&mut *tx)
        .await?;
    sqlx::query(CREATE_ACCOUNTS_TABLE).execute(&mut *tx).await?;
    tx.commit().await?;
    Ok(())
}

pub mod repositories;
