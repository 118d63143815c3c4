use thiserror::Error;

/// Reasons a view refuses to start a request.
///
/// The analytics service itself never fails; these mirror the controls a
/// dashboard disables while input is missing or a request is running.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("No product selected")]
    NoProductSelected,

    #[error("A request is already in progress")]
    RequestInFlight,

    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    #[error("Data has not been loaded yet")]
    NotLoaded,
}
