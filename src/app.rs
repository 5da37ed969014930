use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes::{charts, health, portfolio};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/portfolio", portfolio::router())
        .nest("/api/charts", charts::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
