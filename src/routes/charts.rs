use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::AllocationPoint;
use crate::services::dashboard_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/allocation", get(get_allocation))
}

pub async fn get_allocation(
    State(state): State<AppState>,
) -> Result<Json<Vec<AllocationPoint>>, AppError> {
    info!("GET /api/charts/allocation - Computing sector allocation");
    let points = dashboard_service::allocation(&state.session).map_err(|e| {
        warn!("Allocation unavailable: {}", e);
        e
    })?;
    Ok(Json(points))
}
