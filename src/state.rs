use std::sync::Arc;
use std::time::Duration;

use crate::external::holdings_source::HoldingsSource;
use crate::store::session::PortfolioSession;

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<PortfolioSession>,
    pub source: Arc<dyn HoldingsSource>,
    pub refresh_delay: Duration,
}
