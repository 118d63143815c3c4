use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::Trend;

/// Bounds of the mocked next-month sales figure
pub const NEXT_MONTH_SALES_RANGE: RangeInclusive<u32> = 500..=2499;
/// Bounds of the mocked prediction confidence, in percent
pub const PREDICTION_CONFIDENCE_RANGE: RangeInclusive<u32> = 70..=99;

/// Single-month-ahead sales projection for a product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesPrediction {
    pub next_month_sales: u32,
    pub confidence: u32,
    pub trend: Trend,
}

impl SalesPrediction {
    pub fn is_within_bounds(&self) -> bool {
        NEXT_MONTH_SALES_RANGE.contains(&self.next_month_sales)
            && PREDICTION_CONFIDENCE_RANGE.contains(&self.confidence)
    }
}
