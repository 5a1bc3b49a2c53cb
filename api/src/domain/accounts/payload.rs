//! Mapping between [`Account`] values and their JSON representation.
//!
//! `deserialize` is the only way a request body becomes an [`AccountDraft`];
//! nothing reaches the store without passing through it.

use chrono::NaiveDate;
use serde_json::{Map, Value, json};

use super::account::{Account, AccountDraft, FieldPatch};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid Account: {0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    fn new(detail: impl Into<String>) -> Self {
        Self(detail.into())
    }
}

pub fn serialize(account: &Account) -> Value {
    json!({
        "id": account.id,
        "name": account.name,
        "email": account.email,
        "address": account.address,
        "phone_number": account.phone_number,
        "date_joined": account.date_joined.format(DATE_FORMAT).to_string(),
    })
}

pub fn deserialize(payload: &Value) -> Result<AccountDraft, ValidationError> {
    let Value::Object(fields) = payload else {
        return Err(ValidationError::new(
            "body of request contained bad or no data",
        ));
    };
    Ok(AccountDraft {
        name: required_text(fields, "name")?,
        email: required_text(fields, "email")?,
        address: required_text(fields, "address")?,
        phone_number: optional_text(fields, "phone_number")?,
        date_joined: optional_date(fields, "date_joined")?,
    })
}

/// Column widths of the `accounts` table, in characters.
pub const NAME_MAX: usize = 64;
pub const EMAIL_MAX: usize = 64;
pub const ADDRESS_MAX: usize = 256;
pub const PHONE_NUMBER_MAX: usize = 32;

fn max_len(key: &str) -> usize {
    match key {
        "name" => NAME_MAX,
        "email" => EMAIL_MAX,
        "address" => ADDRESS_MAX,
        _ => PHONE_NUMBER_MAX,
    }
}

fn check_text(key: &str, value: &str) -> Result<(), ValidationError> {
    // Postgres text columns cannot hold NUL
    if value.contains('\0') {
        return Err(ValidationError::new(format!(
            "{key} must not contain NUL characters"
        )));
    }
    let max = max_len(key);
    if value.chars().count() > max {
        return Err(ValidationError::new(format!(
            "{key} must be at most {max} characters"
        )));
    }
    Ok(())
}

fn check_required(key: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(format!("{key} must not be empty")));
    }
    check_text(key, value)
}

/// Field rules applied to values that are about to be written, whatever
/// path they took to get there.
pub fn validate_fields(
    name: &str,
    email: &str,
    address: &str,
    phone_number: Option<&str>,
) -> Result<(), ValidationError> {
    check_required("name", name)?;
    check_required("email", email)?;
    check_required("address", address)?;
    if let Some(phone) = phone_number {
        check_text("phone_number", phone)?;
    }
    Ok(())
}

fn required_text(fields: &Map<String, Value>, key: &str) -> Result<String, ValidationError> {
    match fields.get(key) {
        None | Some(Value::Null) => Err(ValidationError::new(format!("missing {key}"))),
        Some(Value::String(s)) => {
            check_required(key, s)?;
            Ok(s.clone())
        }
        Some(_) => Err(ValidationError::new(format!("{key} must be a string"))),
    }
}

fn optional_text(
    fields: &Map<String, Value>,
    key: &str,
) -> Result<FieldPatch<String>, ValidationError> {
    match fields.get(key) {
        None => Ok(FieldPatch::NotProvided),
        Some(Value::Null) => Ok(FieldPatch::Null),
        Some(Value::String(s)) => {
            check_text(key, s)?;
            Ok(FieldPatch::Value(s.clone()))
        }
        Some(_) => Err(ValidationError::new(format!(
            "{key} must be a string or null"
        ))),
    }
}

fn optional_date(
    fields: &Map<String, Value>,
    key: &str,
) -> Result<Option<NaiveDate>, ValidationError> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Some)
            .map_err(|_| ValidationError::new(format!("{key} must be a YYYY-MM-DD date"))),
        Some(_) => Err(ValidationError::new(format!(
            "{key} must be a YYYY-MM-DD date"
        ))),
    }
}
