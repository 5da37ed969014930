use async_trait::async_trait;
use thiserror::Error;

use crate::models::Holding;

#[derive(Debug, Error)]
pub enum HoldingsSourceError {
    #[error("holdings feed unavailable: {0}")]
    Unavailable(String),
}

/// Inbound boundary for portfolio data: anything that can produce the full
/// holdings collection. The dashboard only ever loads the collection whole;
/// there is no per-holding fetch.
#[async_trait]
pub trait HoldingsSource: Send + Sync {
    async fn fetch_holdings(&self) -> Result<Vec<Holding>, HoldingsSourceError>;
}
