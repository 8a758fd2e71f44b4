//! Closed category registry.
//!
//! The tracker works with a fixed set of category labels. Their order here is
//! canonical: the breakdown walks this list, and ties in the sorted breakdown
//! keep this order, which in turn pins chart ranking and palette colors.

use serde::{Deserialize, Serialize};

use crate::LedgerError;

/// Category labels, in canonical order.
///
/// `"Income"` is special: it is the only label that produces an income-kind
/// record. Everything else is an expense.
pub const CATEGORIES: [&str; 10] = [
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Travel",
    "Education",
    "Income",
    "Other",
];

/// Direction of a transaction, derived from its category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Income,
    Expense,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Human-readable label, as used in the CSV export.
    pub fn label(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl TryFrom<&str> for Kind {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(LedgerError::InvalidDraft(format!(
                "invalid transaction kind: {other}"
            ))),
        }
    }
}

/// Total function from category label to record kind.
///
/// Defined over any string so the engine stays well-behaved on labels outside
/// the registry; only `"Income"` maps to [`Kind::Income`].
pub fn kind_for_category(category: &str) -> Kind {
    if category == "Income" {
        Kind::Income
    } else {
        Kind::Expense
    }
}
