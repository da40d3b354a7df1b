//! Gap-fill suggestion handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::{AppError, AppState};
use meterlog_core::models::{GapSuggestion, Reading};
use meterlog_core::GapFiller;

/// GET /api/gaps/suggestions - Interpolated readings for missing months
pub async fn list_suggestions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<GapSuggestion>>, AppError> {
    let suggestions = GapFiller::new(&state.db).compute_suggestions()?;

    Ok(Json(suggestions))
}

/// POST /api/gaps/fill - Commit every current suggestion
pub async fn fill_all(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, AppError> {
    let created = GapFiller::new(&state.db).commit_all()?;

    Ok(Json(serde_json::json!({ "created": created })))
}

/// POST /api/gaps/fill-one - Commit a single suggestion
///
/// Responds 409 if a reading for the suggested date appeared in the
/// meantime; the frontend re-fetches the suggestion list in that case.
pub async fn fill_one(
    State(state): State<Arc<AppState>>,
    Json(body): Json<GapSuggestion>,
) -> Result<(StatusCode, Json<Reading>), AppError> {
    let reading = GapFiller::new(&state.db).commit_one(&body)?;

    Ok((StatusCode::CREATED, Json(reading)))
}
