//! The module contains the errors the ledger engine can raise.
//!
//! - [`InvalidAmount`] and [`InvalidDraft`] reject a malformed draft before
//!   anything reaches the store.
//! - [`KeyNotFound`] is raised when a record id does not exist.
//! - [`EmptyLedger`] signals an operation that needs at least one record
//!   (export, insight prompt). It is informational, not a hard failure.
//!
//! [`InvalidAmount`]: LedgerError::InvalidAmount
//! [`InvalidDraft`]: LedgerError::InvalidDraft
//! [`KeyNotFound`]: LedgerError::KeyNotFound
//! [`EmptyLedger`]: LedgerError::EmptyLedger
use sea_orm::DbErr;
use thiserror::Error;

/// Ledger engine custom errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid draft: {0}")]
    InvalidDraft(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("the ledger has no transactions")]
    EmptyLedger,
    #[error("serialization failed: {0}")]
    Serialize(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for LedgerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidDraft(a), Self::InvalidDraft(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::EmptyLedger, Self::EmptyLedger) => true,
            (Self::Serialize(a), Self::Serialize(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
