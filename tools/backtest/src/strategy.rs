//! Historical option-strategy back-tester
//!
//! Replays a series of historical spot prices through the pricer and
//! accumulates premium under a mean-reversion entry rule: buy the option
//! whenever the spot sits strictly below the series average.

use crate::pricer::{self, OptionKind};
use serde::{Deserialize, Serialize};

/// A back-test over a historical spot price series.
#[derive(Debug, Clone, Default)]
pub struct Backtest {
    prices: Vec<f64>,
}

/// Aggregated result of one back-test run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestReport {
    /// Number of spot observations replayed.
    pub observations: usize,
    /// Observations that triggered the entry rule.
    pub signals: usize,
    /// Arithmetic mean of the spot series.
    pub mean_price: f64,
    /// Sum of option premiums over all triggered entries.
    pub total_premium: f64,
}

impl BacktestReport {
    fn empty() -> Self {
        Self {
            observations: 0,
            signals: 0,
            mean_price: 0.0,
            total_premium: 0.0,
        }
    }
}

impl Backtest {
    /// Create a back-test with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a back-test over an existing series.
    pub fn from_series(prices: Vec<f64>) -> Self {
        Self { prices }
    }

    /// Append a historical spot observation.
    pub fn push_price(&mut self, price: f64) {
        self.prices.push(price);
    }

    /// The recorded series, oldest first.
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// Arithmetic mean of the series, if non-empty.
    pub fn mean(&self) -> Option<f64> {
        if self.prices.is_empty() {
            return None;
        }
        Some(self.prices.iter().sum::<f64>() / self.prices.len() as f64)
    }

    /// Replay the series against one option contract.
    ///
    /// For every observation strictly below the series mean, the option's
    /// Black-Scholes value at that spot is added to the total. An empty
    /// series yields a zeroed report.
    pub fn run(
        &self,
        kind: OptionKind,
        strike: f64,
        maturity: f64,
        rate: f64,
        vol: f64,
    ) -> BacktestReport {
        let Some(mean) = self.mean() else {
            return BacktestReport::empty();
        };

        let mut signals = 0;
        let mut total_premium = 0.0;
        for &spot in &self.prices {
            if spot < mean {
                total_premium += pricer::price(kind, spot, strike, maturity, rate, vol);
                signals += 1;
            }
        }

        BacktestReport {
            observations: self.prices.len(),
            signals,
            mean_price: mean,
            total_premium,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_series_yields_zero_report() {
        let report = Backtest::new().run(OptionKind::Call, 100.0, 1.0, 0.05, 0.2);
        assert_eq!(report, BacktestReport::empty());
    }

    #[test]
    fn test_entry_rule_counts_below_mean_observations() {
        // mean = 99.5; signals at 95.0 and 98.0
        let backtest = Backtest::from_series(vec![95.0, 100.0, 105.0, 98.0]);
        let report = backtest.run(OptionKind::Call, 100.0, 1.0, 0.05, 0.2);

        assert_eq!(report.observations, 4);
        assert_eq!(report.signals, 2);
        assert!((report.mean_price - 99.5).abs() < 1e-12);
    }

    #[test]
    fn test_total_premium_matches_pricer_sum() {
        let backtest = Backtest::from_series(vec![95.0, 100.0, 105.0, 98.0]);
        let report = backtest.run(OptionKind::Call, 100.0, 1.0, 0.05, 0.2);

        let expected = pricer::call_price(95.0, 100.0, 1.0, 0.05, 0.2)
            + pricer::call_price(98.0, 100.0, 1.0, 0.05, 0.2);
        assert!((report.total_premium - expected).abs() < 1e-12);
    }

    #[test]
    fn test_uniform_series_triggers_nothing() {
        // no observation is strictly below the mean
        let backtest = Backtest::from_series(vec![100.0; 5]);
        let report = backtest.run(OptionKind::Put, 100.0, 0.5, 0.02, 0.3);

        assert_eq!(report.signals, 0);
        assert_eq!(report.total_premium, 0.0);
        assert_eq!(report.observations, 5);
    }

    #[test]
    fn test_push_price_accumulates() {
        let mut backtest = Backtest::new();
        backtest.push_price(95.0);
        backtest.push_price(105.0);

        assert_eq!(backtest.prices(), &[95.0, 105.0]);
        assert_eq!(backtest.mean(), Some(100.0));
    }

    #[test]
    fn test_report_serialization() {
        let backtest = Backtest::from_series(vec![95.0, 100.0, 105.0]);
        let report = backtest.run(OptionKind::Put, 100.0, 1.0, 0.05, 0.2);

        let json = serde_json::to_string(&report).unwrap();
        let deserialized: BacktestReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, deserialized);
    }
}
