use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Record direction on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

pub mod transaction {
    use super::*;

    /// Create/update payload. Amounts travel as integer cents; the kind is
    /// derived server-side from the category.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct TransactionDraft {
        pub amount_cents: i64,
        pub category: String,
        pub date: DateTime<Utc>,
        pub note: Option<String>,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct TransactionView {
        pub id: Uuid,
        pub amount_cents: i64,
        pub category: String,
        pub kind: TransactionKind,
        pub date: DateTime<Utc>,
        pub note: Option<String>,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct TransactionListResponse {
        pub transactions: Vec<TransactionView>,
    }

    /// Body of the clear-all request.
    ///
    /// `confirm` must be `true`; the handler rejects anything else so a
    /// stray request can never wipe the ledger.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct ClearAll {
        #[serde(default)]
        pub confirm: bool,
    }
}

pub mod stats {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Totals {
        pub income_cents: i64,
        pub expense_cents: i64,
        pub balance_cents: i64,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CategorySlice {
        pub category: String,
        pub amount_cents: i64,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ChartSlice {
        pub category: String,
        /// Truncated name for chart axes.
        pub label: String,
        pub amount_cents: i64,
        pub color: String,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct CategoryDetail {
        pub transactions: Vec<transaction::TransactionView>,
        pub amount_cents: i64,
        pub count: usize,
        pub average_cents: i64,
        pub percent_of_expenses: f64,
    }
}

pub mod insight {
    use super::*;

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct Ask {
        pub question: String,
    }

    /// Exact, unmodified user-facing text from the insight service (or one
    /// of the engine's canned replies).
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct Reply {
        pub reply: String,
    }
}
