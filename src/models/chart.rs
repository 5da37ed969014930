use serde::{Deserialize, Serialize};

/// One slice of the sector-allocation pie chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationPoint {
    pub sector: String,
    pub value: f64,
    pub weight: f64,
    pub color: String,
}

/// Display color for a sector slice. Unknown sectors get a neutral fallback.
pub fn sector_color(sector: &str) -> &'static str {
    match sector {
        "Technology" => "#3b82f6",
        "Financials" => "#10b981",
        "Retail" => "#f59e0b",
        "Healthcare" => "#6366f1",
        _ => "#8884d8",
    }
}
