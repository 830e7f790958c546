//! Chat query endpoint

use axum::{extract::State, Json};

use crate::generation::compose_reply;
use crate::server::state::AppState;
use crate::types::{ChatReply, QueryRequest};

/// POST /api/query - Answer a question from the stored sources
pub async fn query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Json<ChatReply> {
    tracing::info!("Query: \"{}\"", request.question);

    let documents = state.store().list();
    let reply = compose_reply(state.retrieval(), &request.question, &documents);

    tracing::debug!("Reply with {} citations", reply.citations().len());
    Json(reply)
}
