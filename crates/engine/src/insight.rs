//! Insight request builder.
//!
//! Serializes the transaction snapshot plus a user question into a single
//! prompt for the external text-completion service, and owns the canned
//! user-facing strings around it. The service response is relayed verbatim;
//! the engine never parses structure out of it.

use serde::Serialize;

use crate::{LedgerError, ResultLedger, Transaction};

/// Reply used instead of a service call when the ledger is empty.
pub const NO_TRANSACTIONS_REPLY: &str =
    "You have no transactions to analyze. Please add some expenses and try again.";

/// User-facing reply substituted for any service failure.
pub const FALLBACK_REPLY: &str =
    "Sorry, I couldn't generate insights at the moment. Please try again later.";

/// Canonical question behind the one-click insights action.
pub const GENERAL_QUESTION: &str = "Based on all the transactions, provide some analysis and \
     insights into my spending habits. Give me some tips to save money.";

#[derive(Serialize)]
struct PromptRecord<'a> {
    amount: String,
    category: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<&'a str>,
}

/// Builds the completion prompt for a free-text question.
///
/// Fails with [`LedgerError::EmptyLedger`] when there is nothing to analyze;
/// callers map that to [`NO_TRANSACTIONS_REPLY`] without contacting the
/// service.
pub fn build_prompt(records: &[Transaction], question: &str) -> ResultLedger<String> {
    if records.is_empty() {
        return Err(LedgerError::EmptyLedger);
    }

    let rows: Vec<PromptRecord<'_>> = records
        .iter()
        .map(|tx| PromptRecord {
            amount: tx.amount.to_string(),
            category: &tx.category,
            kind: tx.kind.as_str(),
            date: tx.date.to_rfc3339(),
            note: tx.note.as_deref(),
        })
        .collect();
    let data =
        serde_json::to_string_pretty(&rows).map_err(|err| LedgerError::Serialize(err.to_string()))?;

    Ok(format!(
        "You are an expert financial assistant. Analyze the following transaction data and \
         answer the user's question. Provide a concise and helpful response. Do not use markdown \
         and do not write long texts, just simple english, and give the insights in points so \
         they are easy to read.\n\nTransaction Data:\n{data}\n\nUser Question:\n{question}"
    ))
}

/// Prompt for the one-click insights action.
pub fn build_general_prompt(records: &[Transaction]) -> ResultLedger<String> {
    build_prompt(records, GENERAL_QUESTION)
}

/// Maps a service outcome to the text shown to the user.
///
/// Success passes the reply through unmodified; any failure becomes the
/// fixed [`FALLBACK_REPLY`], never a raw error.
pub fn relay_response<E>(reply: Result<String, E>) -> String {
    match reply {
        Ok(text) => text,
        Err(_) => FALLBACK_REPLY.to_string(),
    }
}
