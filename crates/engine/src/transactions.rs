//! Transaction primitives.
//!
//! A [`Transaction`] is a single income or expense record. Its `kind` is
//! derived from the category at draft validation time and never edited on
//! its own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Amount, Kind, LedgerError, categories};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: Amount,
    pub category: String,
    pub date: DateTime<Utc>,
    pub note: Option<String>,
    pub kind: Kind,
}

/// User-supplied fields for a create or update, before validation.
///
/// The store never sees a draft directly; [`Draft::validate`] gates every
/// mutation path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draft {
    pub amount: Amount,
    pub category: String,
    pub date: DateTime<Utc>,
    pub note: Option<String>,
}

impl Draft {
    /// Checks the draft invariants and returns the derived record kind.
    ///
    /// A draft is valid when the amount is strictly positive and the
    /// category is non-empty.
    pub fn validate(&self) -> Result<Kind, LedgerError> {
        if !self.amount.is_positive() {
            return Err(LedgerError::InvalidAmount(
                "amount must be greater than zero".to_string(),
            ));
        }
        if self.category.trim().is_empty() {
            return Err(LedgerError::InvalidDraft(
                "category is required".to_string(),
            ));
        }
        Ok(categories::kind_for_category(&self.category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(amount: i64, category: &str) -> Draft {
        Draft {
            amount: Amount::new(amount),
            category: category.to_string(),
            date: Utc::now(),
            note: None,
        }
    }

    #[test]
    fn validate_derives_kind_from_category() {
        assert_eq!(draft(100, "Income").validate().unwrap(), Kind::Income);
        assert_eq!(draft(100, "Travel").validate().unwrap(), Kind::Expense);
    }

    #[test]
    fn validate_rejects_non_positive_amount() {
        assert!(matches!(
            draft(0, "Travel").validate(),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert!(matches!(
            draft(-100, "Travel").validate(),
            Err(LedgerError::InvalidAmount(_))
        ));
    }

    #[test]
    fn validate_rejects_blank_category() {
        assert!(matches!(
            draft(100, "  ").validate(),
            Err(LedgerError::InvalidDraft(_))
        ));
    }
}
