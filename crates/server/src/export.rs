//! CSV export endpoint

use axum::{extract::State, http::header, response::IntoResponse};

use crate::{ServerError, server::ServerState};

/// Streams the ledger as a CSV attachment.
///
/// An empty ledger surfaces as 422 "nothing to export".
pub async fn download(State(state): State<ServerState>) -> Result<impl IntoResponse, ServerError> {
    let ledger = state.ledger.read().await;
    let csv = ledger.export_csv()?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"transactions.csv\"",
            ),
        ],
        csv,
    ))
}
