//! Transactions API endpoints

use api_types::{
    TransactionKind as ApiKind,
    transaction::{ClearAll, TransactionDraft, TransactionListResponse, TransactionView},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{ServerError, server::ServerState};
use engine::{Amount, Draft};

fn map_kind(kind: engine::Kind) -> ApiKind {
    match kind {
        engine::Kind::Income => ApiKind::Income,
        engine::Kind::Expense => ApiKind::Expense,
    }
}

pub(crate) fn map_view(tx: &engine::Transaction) -> TransactionView {
    TransactionView {
        id: tx.id,
        amount_cents: tx.amount.cents(),
        category: tx.category.clone(),
        kind: map_kind(tx.kind),
        date: tx.date,
        note: tx.note.clone(),
    }
}

fn map_draft(payload: TransactionDraft) -> Draft {
    Draft {
        amount: Amount::new(payload.amount_cents),
        category: payload.category,
        date: payload.date,
        note: payload.note,
    }
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<TransactionListResponse>, ServerError> {
    let ledger = state.ledger.read().await;
    let transactions = ledger.transactions().iter().map(map_view).collect();

    Ok(Json(TransactionListResponse { transactions }))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TransactionDraft>,
) -> Result<(StatusCode, Json<TransactionView>), ServerError> {
    let mut ledger = state.ledger.write().await;
    let created = ledger.create(map_draft(payload)).await?;

    Ok((StatusCode::CREATED, Json(map_view(&created))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TransactionDraft>,
) -> Result<StatusCode, ServerError> {
    let mut ledger = state.ledger.write().await;
    ledger.update(id, map_draft(payload)).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    let mut ledger = state.ledger.write().await;
    ledger.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Clear-all is destructive and unscoped, so the body must carry an explicit
/// `confirm: true`.
pub async fn clear_all(
    State(state): State<ServerState>,
    Json(payload): Json<ClearAll>,
) -> Result<StatusCode, ServerError> {
    if !payload.confirm {
        return Err(ServerError::Generic(
            "clearing all transactions requires confirm: true".to_string(),
        ));
    }

    let mut ledger = state.ledger.write().await;
    ledger.clear_all().await?;

    Ok(StatusCode::NO_CONTENT)
}
