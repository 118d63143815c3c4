use serde::{Deserialize, Serialize};
use std::fmt;

/// Short human-readable status message surfaced on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Insight(String);

impl Insight {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Insight {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Monthly demand series plotted on the dashboard chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictiveSeries {
    pub labels: Vec<String>,
    pub data: Vec<u32>,
}

impl PredictiveSeries {
    /// Label/value pairs, truncated to the shorter of the two sequences
    pub fn points(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.data.iter().copied())
    }
}
