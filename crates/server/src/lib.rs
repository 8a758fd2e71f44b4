use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::LedgerError;

use serde::Serialize;
pub use gemini::{GeminiClient, InsightError, InsightService};
pub use server::{ServerState, router, run_with_listener, spawn_with_listener};

mod export;
mod gemini;
mod insight;
mod server;
mod statistics;
mod transactions;

pub mod types {
    pub mod transaction {
        pub use api_types::transaction::{
            ClearAll, TransactionDraft, TransactionListResponse, TransactionView,
        };
    }

    pub mod stats {
        pub use api_types::stats::{CategoryDetail, CategorySlice, ChartSlice, Totals};
    }

    pub mod insight {
        pub use api_types::insight::{Ask, Reply};
    }
}

pub enum ServerError {
    Ledger(LedgerError),
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_ledger_error(err: &LedgerError) -> StatusCode {
    match err {
        LedgerError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        LedgerError::InvalidAmount(_) | LedgerError::InvalidDraft(_) | LedgerError::EmptyLedger => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        LedgerError::Serialize(_) | LedgerError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for_ledger_error(err: LedgerError) -> String {
    match err {
        LedgerError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        LedgerError::EmptyLedger => "nothing to export".to_string(),
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Ledger(err) => {
                (status_for_ledger_error(&err), message_for_ledger_error(err))
            }
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<LedgerError> for ServerError {
    fn from(value: LedgerError) -> Self {
        Self::Ledger(value)
    }
}
