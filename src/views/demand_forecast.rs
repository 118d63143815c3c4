use std::fmt;
use tracing::{debug, info};

use super::BusyFlag;
use crate::{
    errors::ViewError,
    models::{sales::records_for_product, DemandForecast, SalesRecord},
    services::AnalyticsApi,
};

/// Three-month demand forecast for a free-text product name.
#[derive(Debug, Clone, Default)]
pub struct DemandForecastView {
    product_name: String,
    history: Vec<SalesRecord>,
    forecast: Option<DemandForecast>,
    loading: bool,
}

impl DemandForecastView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sales history offered to the service alongside each request
    pub fn with_history(mut self, history: Vec<SalesRecord>) -> Self {
        self.history = history;
        self
    }

    /// Replaces the history with the sales records the service reports.
    pub async fn load_history<A>(&mut self, api: &A)
    where
        A: AnalyticsApi + ?Sized,
    {
        self.history = api.fetch_sales_data().await;
        debug!(records = self.history.len(), "Forecast history loaded");
    }

    pub fn set_product_name(&mut self, product_name: impl Into<String>) {
        self.product_name = product_name.into();
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn forecast(&self) -> Option<&DemandForecast> {
        self.forecast.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Marks a forecast as running and returns the trimmed product name.
    pub fn begin_forecast(&mut self) -> Result<String, ViewError> {
        if self.loading {
            return Err(ViewError::RequestInFlight);
        }
        let product = self.product_name.trim();
        if product.is_empty() {
            return Err(ViewError::NoProductSelected);
        }
        self.loading = true;
        Ok(product.to_string())
    }

    pub fn complete_forecast(&mut self, forecast: DemandForecast) {
        self.forecast = Some(forecast);
        self.loading = false;
    }

    /// History records for `product`, owned so they can cross an await
    pub fn history_for(&self, product: &str) -> Vec<SalesRecord> {
        records_for_product(&self.history, product)
            .into_iter()
            .cloned()
            .collect()
    }

    pub async fn generate<A>(&mut self, api: &A) -> Result<&DemandForecast, ViewError>
    where
        A: AnalyticsApi + ?Sized,
    {
        let product = self.begin_forecast()?;
        let history = self.history_for(&product);
        info!(product = %product, history = history.len(), "Requesting demand forecast");

        let slot = (!history.is_empty()).then_some(history.as_slice());
        let forecast = {
            let _busy = BusyFlag::new(&mut self.loading);
            api.fetch_demand_forecast(&product, slot).await
        };
        Ok(self.forecast.insert(forecast))
    }
}

impl fmt::Display for DemandForecastView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Demand Forecasting")?;
        if !self.product_name.is_empty() {
            writeln!(f, "  Product: {}", self.product_name)?;
        }
        if self.loading {
            writeln!(f, "  Generating forecast...")?;
        }

        let Some(forecast) = &self.forecast else {
            return Ok(());
        };

        writeln!(f)?;
        writeln!(f, "Demand Forecast - Next 3 Months")?;
        writeln!(f, "Monthly Predictions")?;
        for month in &forecast.next_three_months {
            writeln!(
                f,
                "  {:<4} [Demand: {} units] [Confidence: {}%]",
                month.month, month.predicted_demand, month.confidence
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Influencing Factors")?;
        writeln!(f, "  [Seasonal Trend: {}]", forecast.seasonal_trend)?;
        for factor in &forecast.factors {
            writeln!(f, "  * {}", factor)?;
        }
        Ok(())
    }
}
