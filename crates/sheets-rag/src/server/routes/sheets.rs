//! Spreadsheet connection endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::server::state::AppState;
use crate::types::{ConnectRequest, SheetSnapshot};

/// POST /api/sheets/connect - Aggregate the linked worksheets into the knowledge table
pub async fn connect_sheets(
    State(state): State<AppState>,
    Json(request): Json<ConnectRequest>,
) -> Result<Json<SheetSnapshot>> {
    let snapshot = state.sheets().connect(&request.links).await?;
    Ok(Json(snapshot))
}

/// GET /api/sheets - Connection status and table preview
pub async fn sheets_status(State(state): State<AppState>) -> Json<SheetSnapshot> {
    Json(state.sheets().snapshot())
}
