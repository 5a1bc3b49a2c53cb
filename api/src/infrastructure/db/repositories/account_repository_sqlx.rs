use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::account_repository::{AccountRepository, NewAccount};
use crate::domain::accounts::account::Account;
use crate::domain::accounts::payload::validate_fields;
use crate::infrastructure::db::PgPool;

const COLUMNS: &str = "id, name, email, address, phone_number, date_joined";

pub struct SqlxAccountRepository {
    pub pool: PgPool,
}

impl SqlxAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_row(r: &PgRow) -> Result<Account, sqlx::Error> {
    Ok(Account {
        id: r.try_get("id")?,
        name: r.try_get("name")?,
        email: r.try_get("email")?,
        address: r.try_get("address")?,
        phone_number: r.try_get("phone_number")?,
        date_joined: r.try_get("date_joined")?,
    })
}

#[async_trait]
impl AccountRepository for SqlxAccountRepository {
    async fn create(&self, account: &NewAccount) -> anyhow::Result<Account> {
        validate_fields(
            &account.name,
            &account.email,
            &account.address,
            account.phone_number.as_deref(),
        )?;
        let row = sqlx::query(&format!(
            r#"INSERT INTO accounts (name, email, address, phone_number, date_joined)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING {COLUMNS}"#
        ))
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.address)
        .bind(&account.phone_number)
        .bind(account.date_joined)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_row(&row)?)
    }

    async fn find(&self, id: i64) -> anyhow::Result<Option<Account>> {
        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM accounts WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(map_row).transpose()?)
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Account>> {
        let rows = sqlx::query(&format!("SELECT {COLUMNS} FROM accounts ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        let accounts = rows.iter().map(map_row).collect::<Result<Vec<_>, _>>()?;
        Ok(accounts)
    }

    async fn update(&self, account: &Account) -> anyhow::Result<Option<Account>> {
        validate_fields(
            &account.name,
            &account.email,
            &account.address,
            account.phone_number.as_deref(),
        )?;
        let row = sqlx::query(&format!(
            r#"UPDATE accounts
               SET name = $2, email = $3, address = $4, phone_number = $5, date_joined = $6
               WHERE id = $1
               RETURNING {COLUMNS}"#
        ))
        .bind(account.id)
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.address)
        .bind(&account.phone_number)
        .bind(account.date_joined)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_row).transpose()?)
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
