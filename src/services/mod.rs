// Analytics contract and its mock implementation
pub mod analytics;

// Injectable collaborators for the mock
pub mod calendar;
pub mod random;

pub use analytics::{AnalyticsApi, MockAnalyticsService, DEFAULT_LATENCY};
