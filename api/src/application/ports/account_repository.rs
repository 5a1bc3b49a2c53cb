use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::accounts::account::Account;

/// Row values for an insert; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: Option<String>,
    pub date_joined: NaiveDate,
}

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn create(&self, account: &NewAccount) -> anyhow::Result<Account>;

    async fn find(&self, id: i64) -> anyhow::Result<Option<Account>>;

    async fn list_all(&self) -> anyhow::Result<Vec<Account>>;

    // Overwrites every mutable column; None when no row has `account.id`
    async fn update(&self, account: &Account) -> anyhow::Result<Option<Account>>;

    // Returns whether a row was removed
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
}
