use crate::domain::accounts::payload::ValidationError;

#[derive(thiserror::Error, Debug)]
pub enum AccountError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    UnsupportedMediaType(String),
    #[error("Account with id [{0}] could not be found.")]
    NotFound(i64),
    #[error("account store failure")]
    Store(#[source] anyhow::Error),
}

// Stores report rejected rows as a ValidationError inside anyhow
impl From<anyhow::Error> for AccountError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<ValidationError>() {
            Ok(invalid) => AccountError::Validation(invalid),
            Err(other) => AccountError::Store(other),
        }
    }
}
