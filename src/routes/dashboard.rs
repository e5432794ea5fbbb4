//! Dashboard routes: business overview and per-client summary.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::dashboard::{DashboardSummary, SummaryResponse};
use crate::services::dashboard;
use crate::AppState;

/// GET /api/dashboard: establishment-wide summary.
pub async fn business(State(state): State<AppState>) -> Result<Json<SummaryResponse>, AppError> {
    let summary = dashboard::business_summary(state.repo.as_ref(), state.clock.now()).await?;
    Ok(Json(DashboardSummary::from(summary).into()))
}

/// GET /api/dashboard/{client_id}: summary for one client.
///
/// A malformed id is rejected by the `Path` extractor; an unknown id returns
/// an empty summary.
pub async fn client(
    State(state): State<AppState>,
    Path(client_id): Path<Uuid>,
) -> Result<Json<SummaryResponse>, AppError> {
    let summary =
        dashboard::client_summary(state.repo.as_ref(), client_id, state.clock.now()).await?;
    Ok(Json(DashboardSummary::from(summary).into()))
}
