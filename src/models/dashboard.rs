use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Holding, PortfolioSummary, PositionMetrics, SectorSummary};

/// One row of the holdings table: the position plus its derived figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoldingRow {
    pub holding: Holding,
    pub metrics: PositionMetrics,
}

/// Holdings of one sector together with that sector's summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorGroup {
    pub sector: String,
    pub summary: SectorSummary,
    pub holdings: Vec<HoldingRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardMeta {
    pub as_of: DateTime<Utc>,
    pub holdings: usize,
    pub sectors: usize,
}

/// Everything the dashboard needs in a single response: the overall summary,
/// holdings grouped by sector in first-seen order, and collection metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub summary: PortfolioSummary,
    pub sectors: Vec<SectorGroup>,
    pub meta: DashboardMeta,
}
