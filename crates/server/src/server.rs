use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tokio::sync::RwLock;

use crate::{InsightService, export, insight, statistics, transactions};
use engine::Ledger;

#[derive(Clone)]
pub struct ServerState {
    pub ledger: Arc<RwLock<Ledger>>,
    pub insight: Arc<dyn InsightService>,
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route(
            "/transactions",
            get(transactions::list).post(transactions::create),
        )
        .route("/transactions/all", delete(transactions::clear_all))
        .route(
            "/transactions/{id}",
            put(transactions::update).delete(transactions::remove),
        )
        .route("/stats/totals", get(statistics::totals))
        .route("/stats/breakdown", get(statistics::breakdown))
        .route("/stats/chart", get(statistics::chart))
        .route("/stats/category/{name}", get(statistics::category))
        .route("/ask", post(insight::ask))
        .route("/insights", get(insight::general))
        .route("/export", get(export::download))
        .with_state(state)
}

pub async fn run_with_listener(
    ledger: Ledger,
    insight: Arc<dyn InsightService>,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        ledger: Arc::new(RwLock::new(ledger)),
        insight,
    };

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    ledger: Ledger,
    insight: Arc<dyn InsightService>,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(ledger, insight, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
