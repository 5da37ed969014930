use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::models::{DashboardResponse, PortfolioSummary, SectorSummary};
use crate::services::dashboard_service;
use crate::state::AppState;
use crate::store::session::SessionStatus;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_dashboard))
        .route("/load", post(load_portfolio))
        .route("/refresh", post(refresh_portfolio))
        .route("/summary", get(get_summary))
        .route("/sectors", get(get_sectors))
        .route("/status", get(get_status))
}

#[axum::debug_handler]
pub async fn load_portfolio(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    info!("POST /api/portfolio/load - Loading holdings");
    let view = dashboard_service::load(&state.session, state.source.as_ref())
        .await
        .map_err(|e| {
            error!("Failed to load portfolio: {}", e);
            e
        })?;
    Ok(Json(view))
}

pub async fn refresh_portfolio(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    info!("POST /api/portfolio/refresh - Simulating market movement");
    let mut rng = StdRng::from_os_rng();
    let view = dashboard_service::refresh(&state.session, state.refresh_delay, &mut rng)
        .await
        .map_err(|e| {
            match &e {
                AppError::NotReady(_) => warn!("Refresh rejected: {}", e),
                _ => error!("Failed to refresh portfolio: {}", e),
            }
            e
        })?;
    Ok(Json(view))
}

pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    info!("GET /api/portfolio - Building dashboard view");
    let view = dashboard_service::dashboard(&state.session).map_err(|e| {
        warn!("Dashboard unavailable: {}", e);
        e
    })?;
    Ok(Json(view))
}

pub async fn get_summary(
    State(state): State<AppState>,
) -> Result<Json<PortfolioSummary>, AppError> {
    info!("GET /api/portfolio/summary - Computing overall summary");
    let summary = dashboard_service::overall(&state.session)?;
    Ok(Json(summary))
}

pub async fn get_sectors(
    State(state): State<AppState>,
) -> Result<Json<Vec<SectorSummary>>, AppError> {
    info!("GET /api/portfolio/sectors - Computing sector summaries");
    let summaries = dashboard_service::sectors(&state.session)?;
    Ok(Json(summaries))
}

pub async fn get_status(State(state): State<AppState>) -> Json<SessionStatus> {
    info!("GET /api/portfolio/status - Reporting session phase");
    Json(state.session.status())
}
