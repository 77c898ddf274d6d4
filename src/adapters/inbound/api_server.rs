//! Resolver API Server
//!
//! HTTP surface for the resolver: async submit/collect/delete plus the
//! synchronous direct lookup. Every route answers 200 with a JSON
//! envelope; failures are signaled only via the body's `error` field.

use crate::application::ResolverService;
use crate::domain::entities::{ResolveRequest, Resolution};
use crate::infrastructure::{ResultTable, WorkQueue};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared state for all handlers.
#[derive(Clone)]
pub struct ApiState {
    pub queue: Arc<WorkQueue>,
    pub results: Arc<ResultTable>,
    pub resolver: Arc<ResolverService>,
}

/// Build the resolver router over the given state.
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/resolve", axum::routing::post(submit_handler))
        .route(
            "/resolved/:uuid",
            get(get_resolved_handler).delete(delete_resolved_handler),
        )
        .route("/ip/:address", get(direct_lookup_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// HTTP server wrapping the router.
pub struct ApiServer {
    listen_addr: String,
    state: ApiState,
}

impl ApiServer {
    pub fn new(listen_addr: String, state: ApiState) -> Self {
        Self { listen_addr, state }
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        let app = router(self.state.clone());

        let listener = TcpListener::bind(&self.listen_addr).await?;
        tracing::info!("resolver API listening on {}", self.listen_addr);

        axum::serve(listener, app).await?;
        Ok(())
    }
}

// Handler functions

/// `POST /resolve` - enqueue and acknowledge immediately.
///
/// The address is not validated here; a garbage address simply produces
/// a failed outcome once the consumer reaches it.
async fn submit_handler(
    State(state): State<ApiState>,
    Json(request): Json<ResolveRequest>,
) -> impl IntoResponse {
    tracing::info!("queued [{}] {}", request.uuid, request.ip);
    state.queue.enqueue(request);

    Json(json!({ "error": false, "msg": "ok" }))
}

/// `GET /resolved/:uuid` - fetch a stored outcome.
async fn get_resolved_handler(
    State(state): State<ApiState>,
    Path(uuid): Path<String>,
) -> impl IntoResponse {
    match state.results.get(&uuid) {
        Some(outcome) => Json(json!({ "error": false, "result": outcome })),
        None => Json(json!({ "error": true, "msg": "No such resolved UUID" })),
    }
}

/// `DELETE /resolved/:uuid` - drop a stored outcome, idempotently.
async fn delete_resolved_handler(
    State(state): State<ApiState>,
    Path(uuid): Path<String>,
) -> impl IntoResponse {
    state.results.delete(&uuid);
    Json(json!({ "error": false, "msg": "ok" }))
}

/// `GET /ip/:address` - synchronous lookup, bypassing the queue.
async fn direct_lookup_handler(
    State(state): State<ApiState>,
    Path(address): Path<String>,
) -> impl IntoResponse {
    let started = Instant::now();
    let outcome = state.resolver.resolve(&address).await;
    tracing::debug!("{}-query took {:?}", address, started.elapsed());

    match outcome {
        ok @ Resolution::Resolved { .. } => Json(json!({ "error": false, "result": ok })),
        Resolution::Failed { error, .. } => Json(json!({ "error": true, "msg": error })),
    }
}
