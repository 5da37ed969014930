use serde::{Deserialize, Serialize};

/// Aggregate figures for all holdings sharing one sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorSummary {
    pub sector: String,
    pub total_investment: f64,
    pub current_value: f64,
    pub gain_loss: f64,
    pub gain_loss_percentage: f64,
}

/// The same figures computed across the whole portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_investment: f64,
    pub current_value: f64,
    pub gain_loss: f64,
    pub gain_loss_percentage: f64,
}

/// Derived figures for a single position, as shown in the holdings table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionMetrics {
    pub investment: f64,
    pub current_value: f64,
    pub gain_loss: f64,
    pub gain_loss_percentage: f64,
}
