//! Chart data handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{AppError, AppState};
use meterlog_core::models::{ChartPeriod, ChartSeries, StoreSummary};

#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    /// "year", "2years" or "all"; anything else falls back to "all"
    pub period: Option<String>,
}

/// GET /api/charts/data - Cumulative meter series for chart rendering
pub async fn chart_data(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChartQuery>,
) -> Result<Json<ChartSeries>, AppError> {
    let period: ChartPeriod = query
        .period
        .and_then(|p| p.parse().ok())
        .unwrap_or_default();

    let series = state.db.chart_series(period)?;

    Ok(Json(series))
}

/// GET /api/charts/yoy - Year-over-year consumption comparison
pub async fn year_over_year(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, AppError> {
    let years = state.db.year_over_year()?;

    Ok(Json(serde_json::json!({ "years": years })))
}

/// GET /api/charts/summary - Store-wide counts and date range
pub async fn chart_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StoreSummary>, AppError> {
    let summary = state.db.summary()?;

    Ok(Json(summary))
}
