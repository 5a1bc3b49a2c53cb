use chrono::Utc;

use crate::application::errors::AccountError;
use crate::application::ports::account_repository::{AccountRepository, NewAccount};
use crate::domain::accounts::account::{Account, AccountDraft};

pub struct CreateAccount<'a, R: AccountRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: AccountRepository + ?Sized> CreateAccount<'a, R> {
    pub async fn execute(&self, draft: AccountDraft) -> Result<Account, AccountError> {
        let phone_number = draft.phone_number_or_none();
        let row = NewAccount {
            name: draft.name,
            email: draft.email,
            address: draft.address,
            phone_number,
            date_joined: draft
                .date_joined
                .unwrap_or_else(|| Utc::now().date_naive()),
        };
        let account = self.repo.create(&row).await?;
        Ok(account)
    }
}
