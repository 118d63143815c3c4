//! Data entities produced by the analytics service.

pub mod forecast;
pub mod insights;
pub mod prediction;
pub mod sales;
pub mod trend;

pub use forecast::{DemandForecast, MonthForecast};
pub use insights::{Insight, PredictiveSeries};
pub use prediction::SalesPrediction;
pub use sales::SalesRecord;
pub use trend::Trend;
