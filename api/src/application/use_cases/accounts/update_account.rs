use crate::application::errors::AccountError;
use crate::application::ports::account_repository::AccountRepository;
use crate::domain::accounts::account::{Account, AccountDraft};

pub struct UpdateAccount<'a, R: AccountRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: AccountRepository + ?Sized> UpdateAccount<'a, R> {
    // `id` comes from the path; the draft never carries one
    pub async fn execute(&self, id: i64, draft: AccountDraft) -> Result<Account, AccountError> {
        let current = self
            .repo
            .find(id)
            .await?
            .ok_or(AccountError::NotFound(id))?;
        let merged = draft.apply_to(&current);
        // Row may have been deleted between the read and the write
        self.repo
            .update(&merged)
            .await?
            .ok_or(AccountError::NotFound(id))
    }
}
