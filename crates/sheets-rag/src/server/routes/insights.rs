//! Store-wide insights endpoint

use axum::{extract::State, Json};

use crate::server::state::AppState;
use crate::types::Insights;

/// GET /api/insights - Summary, topics and suggested questions
pub async fn insights(State(state): State<AppState>) -> Json<Insights> {
    let documents = state.store().list();
    Json(state.insights().build(&documents))
}
