mod chart;
mod dashboard;
mod holding;
mod summary;

pub use chart::{sector_color, AllocationPoint};
pub use dashboard::{DashboardMeta, DashboardResponse, HoldingRow, SectorGroup};
pub use holding::Holding;
pub use summary::{PortfolioSummary, PositionMetrics, SectorSummary};
