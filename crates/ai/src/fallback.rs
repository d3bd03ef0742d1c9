//! Deterministic forecast used when the model path is unavailable.
//!
//! Model:
//! - velocity = total units sold / 30, whatever the history length
//! - restock_in_days = floor(current / velocity), velocity 0 counts as 1, at least 1
//! - predicted_sales_next_month = floor(velocity * 30)
//! - low_stock_alert = current < min
//!
//! Divisions are done on integers (`current * 30 / total`) so the floors are exact.

use invtrack_inventory::{InventoryItem, SalesRecord, total_units};

use crate::result::AiInsights;

/// Fixed normalisation window for velocity, in days.
pub const VELOCITY_WINDOW_DAYS: u64 = 30;

/// Explanation attached to every fallback forecast.
pub const FALLBACK_EXPLANATION: &str =
    "Fallback logic active: inference endpoint unavailable. Verify network connectivity and GEMINI_API_KEY.";

/// Average daily sales over the fixed 30-day window.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SalesVelocity {
    total_units: u64,
}

impl SalesVelocity {
    pub fn from_history(history: &[SalesRecord]) -> Self {
        Self {
            total_units: total_units(history),
        }
    }

    pub fn total_units(&self) -> u64 {
        self.total_units
    }

    /// Units per day, always divided by 30.
    pub fn per_day(&self) -> f64 {
        self.total_units as f64 / VELOCITY_WINDOW_DAYS as f64
    }

    pub fn is_zero(&self) -> bool {
        self.total_units == 0
    }

    /// Whole days until `current` units are sold, never less than 1.
    pub fn days_until_exhausted(&self, current: u32) -> i64 {
        let current = u64::from(current);
        let days = if self.is_zero() {
            current
        } else {
            current * VELOCITY_WINDOW_DAYS / self.total_units
        };
        to_i64(days.max(1))
    }

    /// Whole units expected over `days` days.
    pub fn projected_units(&self, days: u64) -> i64 {
        let units = u128::from(self.total_units) * u128::from(days) / u128::from(VELOCITY_WINDOW_DAYS);
        i64::try_from(units).unwrap_or(i64::MAX)
    }
}

fn to_i64(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

/// Forecast computed purely from the item's own figures.
pub fn fallback_insights(item: &InventoryItem) -> AiInsights {
    let velocity = SalesVelocity::from_history(item.sales_history());

    AiInsights::new(
        velocity.days_until_exhausted(item.current_quantity()),
        velocity.projected_units(VELOCITY_WINDOW_DAYS),
        item.current_quantity() < item.min_required_quantity(),
    )
    .with_explanation(FALLBACK_EXPLANATION)
}
