use async_trait::async_trait;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::{
    config::AnalyticsConfig,
    fixtures,
    models::{
        forecast::{FORECAST_CONFIDENCE_RANGE, FORECAST_HORIZON_MONTHS, PREDICTED_DEMAND_RANGE},
        prediction::{NEXT_MONTH_SALES_RANGE, PREDICTION_CONFIDENCE_RANGE},
        DemandForecast, Insight, MonthForecast, PredictiveSeries, SalesPrediction, SalesRecord,
        Trend,
    },
    services::{
        calendar::{month_label, Calendar, SystemCalendar},
        random::{EntropySource, RandomSource, SeededSource},
    },
};

/// Simulated round-trip time of every analytics call
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

/// Asynchronous analytics contract used by the dashboard views.
///
/// None of the operations fail. A networked implementation can replace
/// [`MockAnalyticsService`] behind this trait without touching callers.
#[async_trait]
pub trait AnalyticsApi: Send + Sync {
    /// Monthly demand series for the dashboard chart
    async fn fetch_predictive_data(&self) -> PredictiveSeries;

    /// Latest operational status messages
    async fn fetch_real_time_insights(&self) -> Vec<Insight>;

    /// Historical order lines
    async fn fetch_sales_data(&self) -> Vec<SalesRecord>;

    /// Next-month sales projection for a product
    async fn predict_sales(&self, product_name: &str) -> SalesPrediction;

    /// Three-month demand projection for a product. `historical_data` is an
    /// optional slot for past sales of that product.
    async fn fetch_demand_forecast(
        &self,
        product_name: &str,
        historical_data: Option<&[SalesRecord]>,
    ) -> DemandForecast;
}

/// Analytics service that serves fixtures and random draws after an
/// artificial delay.
#[derive(Debug, Clone)]
pub struct MockAnalyticsService {
    latency: Duration,
    random: Arc<dyn RandomSource>,
    calendar: Arc<dyn Calendar>,
}

impl Default for MockAnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAnalyticsService {
    /// Service with the default latency, entropy-seeded draws and the local
    /// calendar.
    pub fn new() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
            random: Arc::new(EntropySource),
            calendar: Arc::new(SystemCalendar),
        }
    }

    /// Builds a service from the `analytics` configuration section
    pub fn from_config(config: &AnalyticsConfig) -> Self {
        let service = Self::new().with_latency(Duration::from_millis(config.latency_ms));
        match config.seed {
            Some(seed) => service.with_seed(seed),
            None => service,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_seed(self, seed: u64) -> Self {
        self.with_random_source(SeededSource::new(seed))
    }

    pub fn with_random_source(mut self, source: impl RandomSource + 'static) -> Self {
        self.random = Arc::new(source);
        self
    }

    pub fn with_calendar(mut self, calendar: impl Calendar + 'static) -> Self {
        self.calendar = Arc::new(calendar);
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn draw_prediction(&self) -> SalesPrediction {
        let mut rng = self.random.fork();
        SalesPrediction {
            next_month_sales: rng.gen_range(NEXT_MONTH_SALES_RANGE),
            confidence: rng.gen_range(PREDICTION_CONFIDENCE_RANGE),
            trend: Trend::Increasing,
        }
    }

    fn draw_forecast(&self) -> DemandForecast {
        let mut rng = self.random.fork();
        let today = self.calendar.today();

        let next_three_months = (1..=FORECAST_HORIZON_MONTHS)
            .map(|offset| MonthForecast {
                month: month_label(today, offset).to_string(),
                predicted_demand: rng.gen_range(PREDICTED_DEMAND_RANGE),
                confidence: rng.gen_range(FORECAST_CONFIDENCE_RANGE),
            })
            .collect();

        let seasonal_trend = if rng.gen_bool(0.5) {
            Trend::Increasing
        } else {
            Trend::Decreasing
        };

        DemandForecast {
            next_three_months,
            seasonal_trend,
            factors: fixtures::forecast_factors(),
        }
    }
}

#[async_trait]
impl AnalyticsApi for MockAnalyticsService {
    async fn fetch_predictive_data(&self) -> PredictiveSeries {
        debug!("Fetching predictive series");
        self.simulate_latency().await;
        fixtures::predictive_series()
    }

    async fn fetch_real_time_insights(&self) -> Vec<Insight> {
        debug!("Fetching real-time insights");
        self.simulate_latency().await;
        fixtures::insights()
    }

    async fn fetch_sales_data(&self) -> Vec<SalesRecord> {
        debug!("Fetching sales history");
        self.simulate_latency().await;
        fixtures::sales_records()
    }

    async fn predict_sales(&self, product_name: &str) -> SalesPrediction {
        let prediction = self.draw_prediction();
        self.simulate_latency().await;
        info!(
            product = product_name,
            next_month_sales = prediction.next_month_sales,
            confidence = prediction.confidence,
            "Sales prediction generated"
        );
        prediction
    }

    async fn fetch_demand_forecast(
        &self,
        product_name: &str,
        historical_data: Option<&[SalesRecord]>,
    ) -> DemandForecast {
        // The history slot does not influence the mocked draws.
        debug!(
            product = product_name,
            history_records = historical_data.map_or(0, |h| h.len()),
            "Generating demand forecast"
        );
        let forecast = self.draw_forecast();
        self.simulate_latency().await;
        info!(
            product = product_name,
            seasonal_trend = %forecast.seasonal_trend,
            "Demand forecast generated"
        );
        forecast
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::calendar::FixedCalendar;
    use chrono::NaiveDate;

    fn instant_service(seed: u64) -> MockAnalyticsService {
        MockAnalyticsService::new()
            .with_latency(Duration::ZERO)
            .with_seed(seed)
            .with_calendar(FixedCalendar(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()))
    }

    #[tokio::test]
    async fn prediction_is_within_bounds() {
        let svc = instant_service(3);
        for _ in 0..200 {
            let p = svc.predict_sales("Laptop Pro X").await;
            assert!(p.is_within_bounds(), "out of range: {:?}", p);
            assert_eq!(p.trend, Trend::Increasing);
        }
    }

    #[tokio::test]
    async fn forecast_months_follow_calendar() {
        let svc = instant_service(11);
        let forecast = svc.fetch_demand_forecast("Tablet Z", None).await;
        assert_eq!(forecast.chart_labels(), vec!["Nov", "Dec", "Jan"]);
        assert_eq!(forecast.factors, fixtures::forecast_factors());
    }

    #[tokio::test]
    async fn history_slot_does_not_change_draws() {
        let history = fixtures::sales_records();
        let with_history = instant_service(5)
            .fetch_demand_forecast("Tablet Z", Some(history.as_slice()))
            .await;
        let without_history = instant_service(5).fetch_demand_forecast("Tablet Z", None).await;
        assert_eq!(with_history, without_history);
    }

    #[test]
    fn from_config_applies_latency_and_seed() {
        let config = AnalyticsConfig {
            latency_ms: 250,
            seed: Some(9),
        };
        let svc = MockAnalyticsService::from_config(&config);
        assert_eq!(svc.latency(), Duration::from_millis(250));
        assert_eq!(
            svc.draw_prediction(),
            MockAnalyticsService::new().with_seed(9).draw_prediction()
        );
    }

    #[test]
    fn default_latency_is_one_second() {
        assert_eq!(MockAnalyticsService::default().latency(), Duration::from_secs(1));
    }
}
