//! Fan-out/fan-in over an inventory list.

use std::collections::BTreeMap;

use futures::future::join_all;
use tracing::info;

use invtrack_core::ItemId;
use invtrack_inventory::InventoryItem;

use crate::forecaster::Forecaster;
use crate::result::ForecastOutcome;

/// Forecast every item concurrently and wait for all of them.
///
/// - One independent call per item; a failing item falls back on its own.
/// - No partial results: the map is returned once every call has finished.
/// - No timeout or cancellation: a hung call holds the whole batch.
///
/// Duplicate ids keep the outcome of the last occurrence.
pub async fn forecast_all<F>(forecaster: &F, items: &[InventoryItem]) -> BTreeMap<ItemId, ForecastOutcome>
where
    F: Forecaster + ?Sized,
{
    let calls = items.iter().map(|item| async move {
        let outcome = forecaster.forecast(item).await;
        (item.id(), outcome)
    });

    let results: BTreeMap<ItemId, ForecastOutcome> = join_all(calls).await.into_iter().collect();

    let fallbacks = results.values().filter(|o| o.is_fallback()).count();
    info!(
        items = items.len(),
        fallbacks,
        "inventory forecast batch completed"
    );

    results
}
