use chrono::NaiveDate;

/// A persisted customer account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: Option<String>,
    pub date_joined: NaiveDate,
}

/// Tri-state for optional fields of an inbound payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPatch<T> {
    NotProvided,
    Null,
    Value(T),
}

/// Validated account fields taken from a request body, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountDraft {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: FieldPatch<String>,
    pub date_joined: Option<NaiveDate>,
}

impl AccountDraft {
    pub fn phone_number_or_none(&self) -> Option<String> {
        match &self.phone_number {
            FieldPatch::Value(v) => Some(v.clone()),
            FieldPatch::NotProvided | FieldPatch::Null => None,
        }
    }

    /// Overlay the draft onto a stored account. Omitted optional fields keep
    /// their stored values, an explicit `null` phone number clears it.
    pub fn apply_to(self, current: &Account) -> Account {
        let phone_number = match self.phone_number {
            FieldPatch::NotProvided => current.phone_number.clone(),
            FieldPatch::Null => None,
            FieldPatch::Value(v) => Some(v),
        };
        Account {
            id: current.id,
            name: self.name,
            email: self.email,
            address: self.address,
            phone_number,
            date_joined: self.date_joined.unwrap_or(current.date_joined),
        }
    }
}
