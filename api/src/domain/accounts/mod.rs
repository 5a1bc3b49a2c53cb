pub mod account;
pub mod payload;
