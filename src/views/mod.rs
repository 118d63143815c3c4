/*!
 * # Views
 *
 * Headless controllers for the three dashboard panels. Each one owns the
 * request lifecycle of the data it shows (loading, then ready) and renders
 * itself as plain text through `Display`.
 */

pub mod dashboard;
pub mod demand_forecast;
pub mod sales_prediction;

pub use dashboard::{DashboardData, DashboardView};
pub use demand_forecast::DemandForecastView;
pub use sales_prediction::SalesPredictionView;

use rust_decimal::Decimal;

/// Lifecycle of data fetched from the analytics service.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Clears a view's busy flag when dropped, including when the request
/// future is cancelled before it settles.
pub(crate) struct BusyFlag<'a>(&'a mut bool);

impl<'a> BusyFlag<'a> {
    pub(crate) fn new(flag: &'a mut bool) -> Self {
        Self(flag)
    }
}

impl Drop for BusyFlag<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

/// Groups the integer digits of `value` in threes, e.g. `1234567` -> `1,234,567`.
pub fn format_thousands(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Dollar amount with grouped thousands; the fraction is kept only when
/// non-zero.
pub fn format_amount(amount: Decimal) -> String {
    let normalized = amount.normalize();
    let text = normalized.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut out = String::new();
    if normalized.is_sign_negative() && !normalized.is_zero() {
        out.push('-');
    }
    out.push('$');
    out.push_str(&group_digits(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
