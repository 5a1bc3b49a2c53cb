use crate::application::errors::AccountError;
use crate::application::ports::account_repository::AccountRepository;

pub struct DeleteAccount<'a, R: AccountRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: AccountRepository + ?Sized> DeleteAccount<'a, R> {
    /// Deleting an id that does not exist is a successful no-op.
    pub async fn execute(&self, id: i64) -> Result<bool, AccountError> {
        let removed = self.repo.delete(id).await?;
        if !removed {
            tracing::debug!(account_id = id, "delete_account_absent");
        }
        Ok(removed)
    }
}
