use serde::{Deserialize, Serialize};

use super::simulator::YearlyResult;
use crate::types::Money;

/// Legend label of the wealth line.
pub const SERIES_LABEL: &str = "Total Wealth";

/// A single line series keyed by year, ready for a charting front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub labels: Vec<String>,
    pub data: Vec<Money>,
}

/// Project yearly results onto a line series.
///
/// Points are the rounded reported values, not the running balance.
pub fn chart_series(results: &[YearlyResult]) -> ChartSeries {
    let (labels, data): (Vec<String>, Vec<Money>) = results
        .iter()
        .map(|r| (r.year.to_string(), r.total_wealth))
        .unzip();

    ChartSeries {
        label: SERIES_LABEL.to_string(),
        labels,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dividend::simulator::{simulate, SimulationInput};
    use rust_decimal_macros::dec;

    #[test]
    fn test_series_follows_results() {
        let input = SimulationInput {
            initial_balance: dec!(30000),
            monthly_deposit: dec!(1000),
            investment_period_years: 2,
            ..SimulationInput::default()
        };
        let results = simulate(&input);
        let series = chart_series(&results);

        assert_eq!(series.label, "Total Wealth");
        assert_eq!(series.labels, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(series.data, vec![dec!(43925.00), dec!(58546.25)]);
    }

    #[test]
    fn test_empty_results_give_empty_series() {
        let series = chart_series(&[]);
        assert!(series.labels.is_empty());
        assert!(series.data.is_empty());
    }
}
