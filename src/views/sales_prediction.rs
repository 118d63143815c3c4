use std::fmt;
use tracing::{debug, info};

use super::{format_amount, format_thousands, BusyFlag, LoadState};
use crate::{
    errors::ViewError,
    models::{sales::unique_products, SalesPrediction, SalesRecord},
    services::AnalyticsApi,
};

/// Sales history table with a per-product next-month prediction.
#[derive(Debug, Clone)]
pub struct SalesPredictionView {
    sales: LoadState<Vec<SalesRecord>>,
    selected_product: Option<String>,
    prediction: Option<SalesPrediction>,
    predicting: bool,
}

impl Default for SalesPredictionView {
    fn default() -> Self {
        Self::new()
    }
}

impl SalesPredictionView {
    pub fn new() -> Self {
        Self {
            sales: LoadState::Loading,
            selected_product: None,
            prediction: None,
            predicting: false,
        }
    }

    pub fn sales(&self) -> &LoadState<Vec<SalesRecord>> {
        &self.sales
    }

    pub fn selected_product(&self) -> Option<&str> {
        self.selected_product.as_deref()
    }

    pub fn prediction(&self) -> Option<&SalesPrediction> {
        self.prediction.as_ref()
    }

    pub fn is_predicting(&self) -> bool {
        self.predicting
    }

    /// Products available for selection, in sales-history order
    pub fn products(&self) -> Vec<String> {
        self.sales
            .ready()
            .map(|records| unique_products(records))
            .unwrap_or_default()
    }

    pub fn set_sales(&mut self, records: Vec<SalesRecord>) {
        debug!(records = records.len(), "Sales history loaded");
        self.sales = LoadState::Ready(records);
    }

    pub async fn load_sales<A>(&mut self, api: &A)
    where
        A: AnalyticsApi + ?Sized,
    {
        self.sales = LoadState::Loading;
        let records = api.fetch_sales_data().await;
        self.set_sales(records);
    }

    /// Selects a product from the loaded history. An empty name clears the
    /// selection.
    pub fn select_product(&mut self, product_name: &str) -> Result<(), ViewError> {
        let name = product_name.trim();
        if name.is_empty() {
            self.selected_product = None;
            return Ok(());
        }

        let records = self.sales.ready().ok_or(ViewError::NotLoaded)?;
        if !records.iter().any(|r| r.product_name == name) {
            return Err(ViewError::UnknownProduct(name.to_string()));
        }

        self.selected_product = Some(name.to_string());
        Ok(())
    }

    /// Marks a prediction as running and returns the product it is for.
    pub fn begin_prediction(&mut self) -> Result<String, ViewError> {
        if self.predicting {
            return Err(ViewError::RequestInFlight);
        }
        let product = self
            .selected_product
            .clone()
            .ok_or(ViewError::NoProductSelected)?;
        self.predicting = true;
        Ok(product)
    }

    pub fn complete_prediction(&mut self, prediction: SalesPrediction) {
        self.prediction = Some(prediction);
        self.predicting = false;
    }

    pub async fn predict<A>(&mut self, api: &A) -> Result<&SalesPrediction, ViewError>
    where
        A: AnalyticsApi + ?Sized,
    {
        let product = self.begin_prediction()?;
        info!(product = %product, "Requesting sales prediction");
        let prediction = {
            let _busy = BusyFlag::new(&mut self.predicting);
            api.predict_sales(&product).await
        };
        Ok(self.prediction.insert(prediction))
    }
}

impl fmt::Display for SalesPredictionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sales Prediction")?;
        match &self.selected_product {
            Some(product) => writeln!(f, "  Product: {}", product)?,
            None => writeln!(f, "  Product: (select a product)")?,
        }
        if self.predicting {
            writeln!(f, "  Predicting...")?;
        }

        if let Some(prediction) = &self.prediction {
            writeln!(f)?;
            writeln!(f, "Prediction Results")?;
            writeln!(
                f,
                "  [Trend: {}] [Confidence: {}%]",
                prediction.trend, prediction.confidence
            )?;
            writeln!(
                f,
                "  Predicted Sales for Next Month: ${}",
                format_thousands(u64::from(prediction.next_month_sales))
            )?;
        }

        if let LoadState::Ready(records) = &self.sales {
            writeln!(f)?;
            writeln!(
                f,
                "  {:<16} {:<10} {:>12}  {}",
                "Product", "Date", "Sales ($)", "City"
            )?;
            for record in records {
                writeln!(
                    f,
                    "  {:<16} {:<10} {:>12}  {}",
                    record.product_name,
                    record.order_date.to_string(),
                    format_amount(record.sales),
                    record.order_city
                )?;
            }
        }
        Ok(())
    }
}
