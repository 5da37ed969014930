use std::collections::HashMap;

use rand::Rng;

use crate::models::{Holding, PortfolioSummary, PositionMetrics, SectorSummary};

/// Gain/loss as a percentage of the amount invested.
///
/// A group whose invested amount is exactly zero has no meaningful
/// percentage; it reports 0 rather than a non-finite value.
fn gain_loss_percentage(gain_loss: f64, total_investment: f64) -> f64 {
    if total_investment == 0.0 {
        0.0
    } else {
        gain_loss / total_investment * 100.0
    }
}

/// Summarize holdings per sector.
///
/// Sectors appear in the output in the order they first appear in the input,
/// one summary per distinct sector. Empty input produces empty output.
pub fn summarize_by_sector(holdings: &[Holding]) -> Vec<SectorSummary> {
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, (f64, f64)> = HashMap::new();

    for h in holdings {
        if !totals.contains_key(h.sector.as_str()) {
            order.push(h.sector.as_str());
        }
        let entry = totals.entry(h.sector.as_str()).or_insert((0.0, 0.0));
        entry.0 += h.purchase_price * h.quantity;
        entry.1 += h.current_price * h.quantity;
    }

    order
        .into_iter()
        .map(|sector| {
            let (total_investment, current_value) = totals[sector];
            let gain_loss = current_value - total_investment;
            SectorSummary {
                sector: sector.to_string(),
                total_investment,
                current_value,
                gain_loss,
                gain_loss_percentage: gain_loss_percentage(gain_loss, total_investment),
            }
        })
        .collect()
}

/// Summarize the whole portfolio without grouping.
pub fn summarize_overall(holdings: &[Holding]) -> PortfolioSummary {
    let (total_investment, current_value) = holdings.iter().fold((0.0, 0.0), |(ti, cv), h| {
        (
            ti + h.purchase_price * h.quantity,
            cv + h.current_price * h.quantity,
        )
    });
    let gain_loss = current_value - total_investment;
    PortfolioSummary {
        total_investment,
        current_value,
        gain_loss,
        gain_loss_percentage: gain_loss_percentage(gain_loss, total_investment),
    }
}

/// Derived figures for a single position, as rendered in the holdings table.
pub fn position_metrics(holding: &Holding) -> PositionMetrics {
    let investment = holding.purchase_price * holding.quantity;
    let current_value = holding.current_price * holding.quantity;
    let gain_loss = current_value - investment;
    PositionMetrics {
        investment,
        current_value,
        gain_loss,
        gain_loss_percentage: gain_loss_percentage(gain_loss, investment),
    }
}

/// Apply a simulated market move to every holding.
///
/// Each current price is scaled by `0.95 + 0.10 * u` with `u` drawn from
/// [0, 1), i.e. a uniform move within ±5% of the previous quote. Cost basis,
/// quantity and identity fields are untouched. Returns a new collection; the
/// input is never mutated. The caller supplies the randomness, so a seeded
/// generator reproduces the same market move.
pub fn refresh_prices<R: Rng>(holdings: &[Holding], rng: &mut R) -> Vec<Holding> {
    holdings
        .iter()
        .map(|h| {
            let factor = 0.95 + 0.10 * rng.random::<f64>();
            Holding {
                current_price: h.current_price * factor,
                ..h.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn holding(id: &str, sector: &str, quantity: f64, purchase: f64, current: f64) -> Holding {
        Holding {
            id: id.to_string(),
            ticker: format!("T{}", id),
            name: format!("Test Co {}", id),
            sector: sector.to_string(),
            quantity,
            purchase_price: purchase,
            current_price: current,
            pe_ratio: Some(20.0),
        }
    }

    fn sample_portfolio() -> Vec<Holding> {
        vec![
            holding("1", "Technology", 10.0, 150.0, 182.5),
            holding("2", "Technology", 5.0, 220.0, 289.75),
            holding("3", "Financials", 8.0, 120.0, 135.5),
            holding("4", "Healthcare", 7.0, 160.0, 155.3),
            holding("5", "Financials", 20.0, 32.0, 29.75),
        ]
    }

    #[test]
    fn test_technology_sector_summary() {
        let holdings = vec![
            holding("1", "Technology", 10.0, 150.0, 182.5),
            holding("2", "Technology", 5.0, 220.0, 289.75),
        ];
        let summaries = summarize_by_sector(&holdings);
        assert_eq!(summaries.len(), 1);

        let tech = &summaries[0];
        assert_eq!(tech.sector, "Technology");
        assert!((tech.total_investment - 2600.0).abs() < 1e-9);
        assert!((tech.current_value - 3273.75).abs() < 1e-9);
        assert!((tech.gain_loss - 673.75).abs() < 1e-9);
        assert!(
            (tech.gain_loss_percentage - 25.9135).abs() < 1e-3,
            "expected ~25.91%, got {}",
            tech.gain_loss_percentage
        );
    }

    #[test]
    fn test_sectors_are_distinct_and_in_first_seen_order() {
        let summaries = summarize_by_sector(&sample_portfolio());
        let sectors: Vec<&str> = summaries.iter().map(|s| s.sector.as_str()).collect();
        assert_eq!(sectors, vec!["Technology", "Financials", "Healthcare"]);
    }

    #[test]
    fn test_sector_summaries_reconstitute_overall_totals() {
        let holdings = sample_portfolio();
        let overall = summarize_overall(&holdings);
        let summaries = summarize_by_sector(&holdings);

        let ti: f64 = summaries.iter().map(|s| s.total_investment).sum();
        let cv: f64 = summaries.iter().map(|s| s.current_value).sum();
        let gl: f64 = summaries.iter().map(|s| s.gain_loss).sum();

        assert!((overall.total_investment - ti).abs() < 1e-9);
        assert!((overall.current_value - cv).abs() < 1e-9);
        assert!((overall.gain_loss - gl).abs() < 1e-9);
    }

    #[test]
    fn test_empty_portfolio() {
        let summaries = summarize_by_sector(&[]);
        assert!(summaries.is_empty());

        let overall = summarize_overall(&[]);
        assert_eq!(overall.total_investment, 0.0);
        assert_eq!(overall.current_value, 0.0);
        assert_eq!(overall.gain_loss, 0.0);
        assert_eq!(overall.gain_loss_percentage, 0.0);
    }

    #[test]
    fn test_flat_prices_mean_zero_gain() {
        let holdings = vec![
            holding("1", "Technology", 10.0, 150.0, 150.0),
            holding("2", "Retail", 4.0, 3100.0, 3100.0),
        ];
        for s in summarize_by_sector(&holdings) {
            assert_eq!(s.gain_loss, 0.0);
            assert_eq!(s.gain_loss_percentage, 0.0);
        }
        let overall = summarize_overall(&holdings);
        assert_eq!(overall.gain_loss, 0.0);
        assert_eq!(overall.gain_loss_percentage, 0.0);
    }

    #[test]
    fn test_zero_investment_percentage_is_guarded() {
        // Free shares: cost basis 0 but positive market value.
        let holdings = vec![holding("1", "Technology", 1.0, 0.0, 10.0)];

        let summaries = summarize_by_sector(&holdings);
        assert_eq!(summaries[0].gain_loss, 10.0);
        assert_eq!(summaries[0].gain_loss_percentage, 0.0);
        assert!(summaries[0].gain_loss_percentage.is_finite());

        let overall = summarize_overall(&holdings);
        assert_eq!(overall.gain_loss_percentage, 0.0);

        let metrics = position_metrics(&holdings[0]);
        assert_eq!(metrics.gain_loss, 10.0);
        assert_eq!(metrics.gain_loss_percentage, 0.0);
    }

    #[test]
    fn test_zero_quantity_sector_is_guarded() {
        let holdings = vec![holding("1", "Technology", 0.0, 150.0, 182.5)];
        let summaries = summarize_by_sector(&holdings);
        assert_eq!(summaries[0].total_investment, 0.0);
        assert_eq!(summaries[0].gain_loss_percentage, 0.0);
    }

    #[test]
    fn test_position_metrics_match_summary_for_single_holding() {
        let h = holding("1", "Technology", 10.0, 150.0, 182.5);
        let metrics = position_metrics(&h);
        assert!((metrics.investment - 1500.0).abs() < 1e-9);
        assert!((metrics.current_value - 1825.0).abs() < 1e-9);
        assert!((metrics.gain_loss - 325.0).abs() < 1e-9);
        assert!((metrics.gain_loss_percentage - 21.6666).abs() < 1e-3);
    }

    #[test]
    fn test_refresh_prices_moves_within_five_percent() {
        let holdings = sample_portfolio();
        let mut rng = StdRng::seed_from_u64(7);
        let refreshed = refresh_prices(&holdings, &mut rng);

        assert_eq!(refreshed.len(), holdings.len());
        for (before, after) in holdings.iter().zip(refreshed.iter()) {
            assert!(after.current_price >= before.current_price * 0.95 - 1e-9);
            assert!(after.current_price <= before.current_price * 1.05 + 1e-9);
        }
    }

    #[test]
    fn test_refresh_prices_only_touches_current_price() {
        let holdings = sample_portfolio();
        let mut rng = StdRng::seed_from_u64(42);
        let refreshed = refresh_prices(&holdings, &mut rng);

        for (before, after) in holdings.iter().zip(refreshed.iter()) {
            assert_eq!(before.id, after.id);
            assert_eq!(before.ticker, after.ticker);
            assert_eq!(before.name, after.name);
            assert_eq!(before.sector, after.sector);
            assert_eq!(before.quantity, after.quantity);
            assert_eq!(before.purchase_price, after.purchase_price);
            assert_eq!(before.pe_ratio, after.pe_ratio);
        }
    }

    #[test]
    fn test_refresh_prices_leaves_input_untouched() {
        let holdings = sample_portfolio();
        let snapshot = holdings.clone();
        let mut rng = StdRng::seed_from_u64(1);
        let _ = refresh_prices(&holdings, &mut rng);
        assert_eq!(holdings, snapshot);
    }

    #[test]
    fn test_refresh_prices_is_deterministic_for_a_seed() {
        let holdings = sample_portfolio();
        let a = refresh_prices(&holdings, &mut StdRng::seed_from_u64(99));
        let b = refresh_prices(&holdings, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
