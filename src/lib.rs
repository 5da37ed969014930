pub mod app;
pub mod config;
pub mod errors;
pub mod external;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

use std::sync::Arc;
use std::time::Duration;

use crate::config::AppConfig;
use crate::external::holdings_source::HoldingsSource;
use crate::external::mock_feed::MockFeed;
use crate::state::AppState;
use crate::store::session::PortfolioSession;

/// Assemble the shared application state from config.
///
/// The holdings source is selected by name (HOLDINGS_SOURCE env var); only
/// the in-memory mock feed exists today, but the selection point is where a
/// real market-data feed would plug in.
pub fn build_state(config: &AppConfig) -> AppState {
    let source: Arc<dyn HoldingsSource> = match config.holdings_source.to_lowercase().as_str() {
        "mock" => {
            tracing::info!(
                "Using holdings source: in-memory mock feed ({}ms simulated latency)",
                config.load_delay_ms
            );
            Arc::new(MockFeed::with_latency(Duration::from_millis(
                config.load_delay_ms,
            )))
        }
        other => {
            panic!("Invalid HOLDINGS_SOURCE: {}. Must be 'mock'", other);
        }
    };

    AppState {
        session: Arc::new(PortfolioSession::new()),
        source,
        refresh_delay: Duration::from_millis(config.refresh_delay_ms),
    }
}
