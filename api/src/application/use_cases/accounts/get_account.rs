use crate::application::errors::AccountError;
use crate::application::ports::account_repository::AccountRepository;
use crate::domain::accounts::account::Account;

pub struct GetAccount<'a, R: AccountRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: AccountRepository + ?Sized> GetAccount<'a, R> {
    pub async fn execute(&self, id: i64) -> Result<Account, AccountError> {
        self.repo.find(id).await?.ok_or(AccountError::NotFound(id))
    }
}
