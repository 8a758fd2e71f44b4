//! Statistics API endpoints

use api_types::stats::{CategoryDetail, CategorySlice, ChartSlice, Totals};
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{ServerError, server::ServerState, transactions::map_view};

pub async fn totals(State(state): State<ServerState>) -> Result<Json<Totals>, ServerError> {
    let ledger = state.ledger.read().await;
    let totals = ledger.totals();

    Ok(Json(Totals {
        income_cents: totals.income.cents(),
        expense_cents: totals.expense.cents(),
        balance_cents: totals.balance.cents(),
    }))
}

pub async fn breakdown(
    State(state): State<ServerState>,
) -> Result<Json<Vec<CategorySlice>>, ServerError> {
    let ledger = state.ledger.read().await;
    let slices = ledger
        .category_breakdown()
        .into_iter()
        .map(|sum| CategorySlice {
            category: sum.category.to_string(),
            amount_cents: sum.amount.cents(),
        })
        .collect();

    Ok(Json(slices))
}

pub async fn chart(State(state): State<ServerState>) -> Result<Json<Vec<ChartSlice>>, ServerError> {
    let ledger = state.ledger.read().await;
    let series = ledger
        .chart_series()
        .into_iter()
        .map(|slice| ChartSlice {
            category: slice.category.to_string(),
            label: slice.label,
            amount_cents: slice.amount.cents(),
            color: slice.color.to_string(),
        })
        .collect();

    Ok(Json(series))
}

pub async fn category(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Result<Json<CategoryDetail>, ServerError> {
    let ledger = state.ledger.read().await;
    let detail = ledger.category_detail(&name);

    Ok(Json(CategoryDetail {
        transactions: detail.transactions.iter().map(map_view).collect(),
        amount_cents: detail.amount.cents(),
        count: detail.count,
        average_cents: detail.average_cents,
        percent_of_expenses: detail.percent_of_expenses,
    }))
}
