//! Reference data served by the mock analytics service.
//!
//! Every accessor builds a fresh owned value, so callers may mutate what they
//! receive without affecting later calls.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::models::{Insight, PredictiveSeries, SalesRecord};

const PREDICTIVE_LABELS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
const PREDICTIVE_DATA: [u32; 6] = [65, 59, 80, 81, 56, 55];

const INSIGHTS: [&str; 4] = [
    "Shipment #1234 delayed by 2 hours",
    "New supplier onboarded successfully",
    "Smart contract executed for order #5678",
    "Inventory levels optimal",
];

const FORECAST_FACTORS: [&str; 4] = [
    "Historical sales patterns",
    "Seasonal variations",
    "Market trends",
    "Economic indicators",
];

/// Static panels shown next to the insights list: (title, description)
pub const BLOCKCHAIN_FEATURES: [(&str, &str); 3] = [
    (
        "Immutable Record Keeping",
        "All supply chain transactions are permanently recorded and cannot be altered.",
    ),
    (
        "Transparency",
        "Complete visibility of supply chain operations for all authorized participants.",
    ),
    (
        "Smart Contracts",
        "Automated execution of supply chain agreements and transactions.",
    ),
];

pub fn predictive_series() -> PredictiveSeries {
    PredictiveSeries {
        labels: PREDICTIVE_LABELS.iter().map(|l| l.to_string()).collect(),
        data: PREDICTIVE_DATA.to_vec(),
    }
}

pub fn insights() -> Vec<Insight> {
    INSIGHTS.iter().copied().map(Insight::from).collect()
}

pub fn forecast_factors() -> Vec<String> {
    FORECAST_FACTORS.iter().map(|f| f.to_string()).collect()
}

pub fn sales_records() -> Vec<SalesRecord> {
    vec![
        SalesRecord::new(
            1,
            "Laptop Pro X",
            date(2024, 1, 15),
            dec!(1500),
            "New York",
            40.7128,
            -74.0060,
        ),
        SalesRecord::new(
            2,
            "Smartphone Y",
            date(2024, 1, 15),
            dec!(800),
            "Los Angeles",
            34.0522,
            -118.2437,
        ),
        SalesRecord::new(
            3,
            "Tablet Z",
            date(2024, 1, 16),
            dec!(600),
            "Chicago",
            41.8781,
            -87.6298,
        ),
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}
