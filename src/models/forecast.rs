use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::Trend;

/// Number of months covered by a demand forecast
pub const FORECAST_HORIZON_MONTHS: u32 = 3;
/// Bounds of the mocked monthly demand, in units
pub const PREDICTED_DEMAND_RANGE: RangeInclusive<u32> = 500..=1499;
/// Bounds of the mocked monthly confidence, in percent
pub const FORECAST_CONFIDENCE_RANGE: RangeInclusive<u32> = 80..=99;

/// Projected demand for one calendar month.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthForecast {
    /// Three-letter month label, e.g. "Nov"
    pub month: String,
    pub predicted_demand: u32,
    pub confidence: u32,
}

/// Three-month-ahead demand projection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemandForecast {
    pub next_three_months: Vec<MonthForecast>,
    pub seasonal_trend: Trend,
    pub factors: Vec<String>,
}

impl DemandForecast {
    /// Month labels in chart order
    pub fn chart_labels(&self) -> Vec<&str> {
        self.next_three_months
            .iter()
            .map(|m| m.month.as_str())
            .collect()
    }

    /// Predicted demand values in chart order
    pub fn chart_values(&self) -> Vec<u32> {
        self.next_three_months
            .iter()
            .map(|m| m.predicted_demand)
            .collect()
    }

    pub fn total_predicted_demand(&self) -> u64 {
        self.next_three_months
            .iter()
            .map(|m| u64::from(m.predicted_demand))
            .sum()
    }
}
