use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Direction of a projected sales or demand curve.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
}

impl Trend {
    pub fn is_increasing(self) -> bool {
        matches!(self, Trend::Increasing)
    }
}
