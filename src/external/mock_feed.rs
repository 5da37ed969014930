use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::external::holdings_source::{HoldingsSource, HoldingsSourceError};
use crate::models::Holding;

/// In-memory stand-in for a market data feed.
///
/// Serves a fixed nine-position dataset after a configurable simulated
/// latency, so the dashboard behaves as if it were talking to a slow remote
/// feed. Set the latency to zero in tests.
pub struct MockFeed {
    latency: Duration,
}

impl MockFeed {
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn dataset() -> Vec<Holding> {
        fn h(
            id: &str,
            ticker: &str,
            name: &str,
            sector: &str,
            quantity: f64,
            purchase_price: f64,
            current_price: f64,
            pe_ratio: f64,
        ) -> Holding {
            Holding {
                id: id.to_string(),
                ticker: ticker.to_string(),
                name: name.to_string(),
                sector: sector.to_string(),
                quantity,
                purchase_price,
                current_price,
                pe_ratio: Some(pe_ratio),
            }
        }

        vec![
            h("1", "AAPL", "Apple Inc.", "Technology", 10.0, 150.00, 182.50, 28.5),
            h("2", "MSFT", "Microsoft", "Technology", 5.0, 220.00, 289.75, 32.1),
            h("3", "GOOGL", "Google", "Technology", 3.0, 2100.00, 2350.00, 25.8),
            h("4", "JPM", "JPMorgan Chase", "Financials", 8.0, 120.00, 135.50, 12.3),
            h("5", "BAC", "Bank of America", "Financials", 20.0, 32.00, 29.75, 10.8),
            h("6", "WMT", "Walmart", "Retail", 12.0, 145.00, 158.20, 22.4),
            h("7", "AMZN", "Amazon", "Retail", 4.0, 3100.00, 3475.00, 58.7),
            h("8", "JNJ", "Johnson & Johnson", "Healthcare", 7.0, 160.00, 155.30, 19.2),
            h("9", "PFE", "Pfizer", "Healthcare", 15.0, 45.00, 38.75, 12.5),
        ]
    }
}

#[async_trait]
impl HoldingsSource for MockFeed {
    async fn fetch_holdings(&self) -> Result<Vec<Holding>, HoldingsSourceError> {
        tokio::time::sleep(self.latency).await;
        let holdings = Self::dataset();
        info!("Mock feed served {} holdings", holdings.len());
        Ok(holdings)
    }
}
