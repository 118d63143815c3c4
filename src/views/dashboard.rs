use serde::Serialize;
use std::fmt;
use tracing::info;

use super::LoadState;
use crate::{
    fixtures::BLOCKCHAIN_FEATURES,
    models::{Insight, PredictiveSeries},
    services::AnalyticsApi,
};

/// Data shown on the main dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    pub predictive: PredictiveSeries,
    pub insights: Vec<Insight>,
}

/// Main dashboard: predictive chart, real-time insights and the static
/// blockchain feature panel.
#[derive(Debug, Clone)]
pub struct DashboardView {
    state: LoadState<DashboardData>,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardView {
    /// Dashboards start out loading; nothing is shown until the first fetch
    /// completes.
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
        }
    }

    pub fn state(&self) -> &LoadState<DashboardData> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn data(&self) -> Option<&DashboardData> {
        self.state.ready()
    }

    /// Fetches the chart series and insights concurrently.
    pub async fn fetch<A>(api: &A) -> DashboardData
    where
        A: AnalyticsApi + ?Sized,
    {
        let (predictive, insights) =
            tokio::join!(api.fetch_predictive_data(), api.fetch_real_time_insights());
        DashboardData {
            predictive,
            insights,
        }
    }

    pub fn complete(&mut self, data: DashboardData) {
        info!(
            points = data.predictive.data.len(),
            insights = data.insights.len(),
            "Dashboard data loaded"
        );
        self.state = LoadState::Ready(data);
    }

    /// Marks the view as loading, fetches, then stores the result.
    pub async fn load<A>(&mut self, api: &A)
    where
        A: AnalyticsApi + ?Sized,
    {
        self.state = LoadState::Loading;
        let data = Self::fetch(api).await;
        self.complete(data);
    }

    pub fn blockchain_features() -> &'static [(&'static str, &'static str)] {
        &BLOCKCHAIN_FEATURES
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = match &self.state {
            LoadState::Ready(data) => data,
            LoadState::Loading => return writeln!(f, "Loading dashboard..."),
        };

        writeln!(f, "Supply Chain Predictive Analytics")?;
        for (label, value) in data.predictive.points() {
            writeln!(f, "  {:<4} {:>5}", label, value)?;
        }

        writeln!(f)?;
        writeln!(f, "Real-time Insights")?;
        for insight in &data.insights {
            writeln!(f, "  - {}", insight)?;
        }

        writeln!(f)?;
        writeln!(f, "Blockchain Features")?;
        for (title, description) in Self::blockchain_features() {
            writeln!(f, "  {}", title)?;
            writeln!(f, "    {}", description)?;
        }
        Ok(())
    }
}
