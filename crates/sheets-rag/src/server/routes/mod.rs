//! API routes for the knowledge server

pub mod insights;
pub mod query;
pub mod sheets;
pub mod sources;

use axum::{
    routing::{get, post},
    Router,
};
use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Sources
        .route("/sources", get(sources::list_sources).post(sources::add_source))
        .route("/sources/samples", post(sources::load_samples))
        // Google Sheets
        .route("/sheets", get(sheets::sheets_status))
        .route("/sheets/connect", post(sheets::connect_sheets))
        // Chat
        .route("/query", post(query::query))
        .route("/insights", get(insights::insights))
        // Info
        .route("/info", get(info))
}

/// API info endpoint
async fn info() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "name": "sheets-rag",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Keyword-retrieval knowledge base with Google Sheets ingestion",
        "endpoints": {
            "GET /api/sources": "List sources, most recent first",
            "POST /api/sources": "Add a source from pasted text",
            "POST /api/sources/samples": "Load the sample sources",
            "GET /api/sheets": "Connection status and table preview",
            "POST /api/sheets/connect": "Connect one or more spreadsheet links",
            "POST /api/query": "Ask a question with citations",
            "GET /api/insights": "Summary, topics and suggested questions"
        }
    }))
}
