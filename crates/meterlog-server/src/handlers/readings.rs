//! Reading CRUD handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{AppError, AppState, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use meterlog_core::models::{NewReading, Reading, ReadingUpdate, ReadingWithDiff};
use meterlog_core::{diff, SortOrder};

#[derive(Debug, Deserialize)]
pub struct ListReadingsQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    /// None = all, false = manual entries, true = interpolated
    pub synthetic: Option<bool>,
}

/// GET /api/readings - List readings with consumption deltas
///
/// Returns the requested window most-recent-first; each entry carries the
/// delta against the next-older reading in the same window, so the oldest
/// entry of a page has no deltas.
pub async fn list_readings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListReadingsQuery>,
) -> Result<Json<Vec<ReadingWithDiff>>, AppError> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_PAGE_LIMIT)
        .clamp(1, MAX_PAGE_LIMIT);
    let offset = query.offset.unwrap_or(0).max(0);

    let window = state.db.list_readings(
        SortOrder::Descending,
        Some(limit),
        offset,
        None,
        query.synthetic,
    )?;

    Ok(Json(diff::with_diffs(&window)))
}

#[derive(Debug, Deserialize)]
pub struct CountQuery {
    pub synthetic: Option<bool>,
}

/// GET /api/readings/count - Total number of readings
pub async fn count_readings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CountQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let count = state.db.count_readings(query.synthetic)?;

    Ok(Json(serde_json::json!({ "count": count })))
}

/// GET /api/readings/:id - Get a single reading
pub async fn get_reading(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Reading>, AppError> {
    let reading = state
        .db
        .get_reading(id)?
        .ok_or_else(|| AppError::not_found("Reading not found"))?;

    Ok(Json(reading))
}

/// POST /api/readings - Create a manual reading
pub async fn create_reading(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewReading>,
) -> Result<(StatusCode, Json<Reading>), AppError> {
    let reading = state.db.create_reading(&body)?;

    Ok((StatusCode::CREATED, Json(reading)))
}

/// PUT /api/readings/:id - Partially update a reading
pub async fn update_reading(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<ReadingUpdate>,
) -> Result<Json<Reading>, AppError> {
    let reading = state.db.update_reading(id, &body)?;

    Ok(Json(reading))
}

/// DELETE /api/readings/:id - Delete a reading
pub async fn delete_reading(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.db.delete_reading(id)?;

    Ok(StatusCode::NO_CONTENT)
}
