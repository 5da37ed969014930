use std::time::Duration;

use rand::Rng;
use tracing::error;

use crate::errors::AppError;
use crate::external::holdings_source::HoldingsSource;
use crate::models::{
    sector_color, AllocationPoint, DashboardMeta, DashboardResponse, HoldingRow, PortfolioSummary,
    SectorGroup, SectorSummary,
};
use crate::services::aggregation;
use crate::store::session::PortfolioSession;

/// User-visible message when the holdings feed cannot be reached.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to fetch portfolio data. Please try again.";

/// Fetch the holdings collection and bring the session to ready.
///
/// Drives `Idle|Failed → Loading → Ready`, or `→ Failed` when the feed is
/// unavailable or hands back data that breaks the holding invariants. There
/// is no automatic retry; a later call starts the next attempt.
pub async fn load(
    session: &PortfolioSession,
    source: &dyn HoldingsSource,
) -> Result<DashboardResponse, AppError> {
    session.begin_load()?;

    let holdings = match source.fetch_holdings().await {
        Ok(holdings) => holdings,
        Err(e) => {
            error!("Holdings fetch failed: {}", e);
            session.fail_load(LOAD_FAILURE_MESSAGE)?;
            return Err(AppError::LoadFailed(LOAD_FAILURE_MESSAGE.to_string()));
        }
    };

    for holding in &holdings {
        if let Err(reason) = holding.validate() {
            error!("Holdings feed returned bad data: {}", reason);
            session.fail_load(LOAD_FAILURE_MESSAGE)?;
            return Err(AppError::LoadFailed(LOAD_FAILURE_MESSAGE.to_string()));
        }
    }

    session.complete_load(holdings)?;
    dashboard(session)
}

/// Simulate a market move: perturb every price within ±5% and swap the new
/// collection in. Drives `Ready → Refreshing → Ready`; rejected unless the
/// portfolio is ready. The caller supplies the randomness so the move is
/// reproducible under test.
pub async fn refresh<R: Rng + Send>(
    session: &PortfolioSession,
    delay: Duration,
    rng: &mut R,
) -> Result<DashboardResponse, AppError> {
    let holdings = session.begin_refresh()?;
    tokio::time::sleep(delay).await;
    let updated = aggregation::refresh_prices(&holdings, rng);
    session.complete_refresh(updated)?;
    dashboard(session)
}

/// Build the full dashboard view from the current holdings: the overall
/// summary plus one group per sector, in sector first-seen order.
pub fn dashboard(session: &PortfolioSession) -> Result<DashboardResponse, AppError> {
    let (holdings, as_of) = session.holdings()?;

    let summary = aggregation::summarize_overall(&holdings);
    let sectors: Vec<SectorGroup> = aggregation::summarize_by_sector(&holdings)
        .into_iter()
        .map(|summary| {
            let rows: Vec<HoldingRow> = holdings
                .iter()
                .filter(|h| h.sector == summary.sector)
                .map(|h| HoldingRow {
                    holding: h.clone(),
                    metrics: aggregation::position_metrics(h),
                })
                .collect();
            SectorGroup {
                sector: summary.sector.clone(),
                summary,
                holdings: rows,
            }
        })
        .collect();

    let meta = DashboardMeta {
        as_of,
        holdings: holdings.len(),
        sectors: sectors.len(),
    };

    Ok(DashboardResponse {
        summary,
        sectors,
        meta,
    })
}

pub fn overall(session: &PortfolioSession) -> Result<PortfolioSummary, AppError> {
    let (holdings, _) = session.holdings()?;
    Ok(aggregation::summarize_overall(&holdings))
}

pub fn sectors(session: &PortfolioSession) -> Result<Vec<SectorSummary>, AppError> {
    let (holdings, _) = session.holdings()?;
    Ok(aggregation::summarize_by_sector(&holdings))
}

/// Pie-chart source data: each sector's share of the portfolio's current
/// market value, with its display color.
pub fn allocation(session: &PortfolioSession) -> Result<Vec<AllocationPoint>, AppError> {
    let (holdings, _) = session.holdings()?;
    let summaries = aggregation::summarize_by_sector(&holdings);
    let total: f64 = summaries.iter().map(|s| s.current_value).sum();

    Ok(summaries
        .into_iter()
        .map(|s| AllocationPoint {
            value: s.current_value,
            weight: if total > 0.0 { s.current_value / total } else { 0.0 },
            color: sector_color(&s.sector).to_string(),
            sector: s.sector,
        })
        .collect())
}
