use serde::{Deserialize, Serialize};

// One equity position. `current_price` is the only field a refresh touches;
// everything else is fixed at creation, including the sector grouping key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub id: String,
    pub ticker: String,
    pub name: String,
    pub sector: String,
    pub quantity: f64,
    pub purchase_price: f64,
    pub current_price: f64,
    pub pe_ratio: Option<f64>,
}

impl Holding {
    /// Check the numeric invariants a holding must satisfy before it is
    /// accepted into the session.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err(format!("holding {} has an empty id", self.ticker));
        }
        if self.sector.trim().is_empty() {
            return Err(format!("holding {} has an empty sector", self.ticker));
        }
        if !self.quantity.is_finite() || self.quantity < 0.0 {
            return Err(format!("holding {} has a negative quantity", self.ticker));
        }
        if !self.purchase_price.is_finite() || self.purchase_price < 0.0 {
            return Err(format!("holding {} has a negative purchase price", self.ticker));
        }
        if !self.current_price.is_finite() || self.current_price < 0.0 {
            return Err(format!("holding {} has a negative current price", self.ticker));
        }
        Ok(())
    }
}
