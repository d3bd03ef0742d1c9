//! Demo data used when no inventory has been persisted yet.

use chrono::{DateTime, Days, NaiveDate, Utc};
use rand::Rng;

use invtrack_core::ItemId;

use crate::catalog::Inventory;
use crate::item::{InventoryItem, NewItem, SalesRecord};

/// Length of the trailing sales window kept per item.
pub const SALES_WINDOW_DAYS: u32 = 30;

/// Build a `days`-long chronological window ending on `today`, with each
/// day's quantity drawn from `quantity(offset)` where offset 0 is the oldest day.
pub fn trailing_sales_window(
    today: NaiveDate,
    days: u32,
    mut quantity: impl FnMut(u32) -> u32,
) -> Vec<SalesRecord> {
    (0..days)
        .filter_map(|offset| {
            let back = u64::from(days - 1 - offset);
            today
                .checked_sub_days(Days::new(back))
                .map(|date| SalesRecord::new(date, quantity(offset)))
        })
        .collect()
}

fn random_window(today: NaiveDate) -> Vec<SalesRecord> {
    let mut rng = rand::rng();
    trailing_sales_window(today, SALES_WINDOW_DAYS, |_| rng.random_range(2..=11))
}

/// The three starter products, each with a random 30-day sales window.
pub fn demo_inventory(now: DateTime<Utc>) -> Inventory {
    let today = now.date_naive();
    let seeds = [
        NewItem::new("Wireless Mechanical Keyboard", "Electronics")
            .with_stock(45, 20)
            .with_price(129.99),
        NewItem::new("Ergonomic Office Chair", "Furniture")
            .with_stock(8, 15)
            .with_price(349.50),
        NewItem::new("USB-C Hub / Docking Station", "Accessories")
            .with_stock(120, 50)
            .with_price(89.00),
    ];

    let items = seeds
        .into_iter()
        .zip(1u64..)
        .filter_map(|(seed, id)| {
            let seed = seed.with_sales_history(random_window(today));
            match InventoryItem::create(ItemId::new(id), seed, now) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!(item_id = id, error = %e, "skipping invalid demo item");
                    None
                }
            }
        })
        .collect();

    Inventory::from_items(items)
}
