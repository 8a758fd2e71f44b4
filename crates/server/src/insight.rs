//! Insight API endpoints
//!
//! Both endpoints build a prompt from the current snapshot and relay the
//! completion service's reply verbatim. An empty ledger short-circuits to
//! the canned reply without contacting the service, and any service failure
//! becomes the fixed fallback text.

use api_types::insight::{Ask, Reply};
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};
use engine::{LedgerError, insight};

pub async fn ask(
    State(state): State<ServerState>,
    Json(payload): Json<Ask>,
) -> Result<Json<Reply>, ServerError> {
    let prompt = {
        let ledger = state.ledger.read().await;
        match ledger.insight_prompt(&payload.question) {
            Ok(prompt) => prompt,
            Err(LedgerError::EmptyLedger) => {
                return Ok(Json(Reply {
                    reply: insight::NO_TRANSACTIONS_REPLY.to_string(),
                }));
            }
            Err(err) => return Err(err.into()),
        }
    };

    let reply = insight::relay_response(state.insight.complete(&prompt).await);
    Ok(Json(Reply { reply }))
}

pub async fn general(State(state): State<ServerState>) -> Result<Json<Reply>, ServerError> {
    let prompt = {
        let ledger = state.ledger.read().await;
        match ledger.general_insight_prompt() {
            Ok(prompt) => prompt,
            Err(LedgerError::EmptyLedger) => {
                return Ok(Json(Reply {
                    reply: insight::NO_TRANSACTIONS_REPLY.to_string(),
                }));
            }
            Err(err) => return Err(err.into()),
        }
    };

    let reply = insight::relay_response(state.insight.complete(&prompt).await);
    Ok(Json(Reply { reply }))
}
