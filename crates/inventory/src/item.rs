use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use invtrack_core::{DomainError, DomainResult, ItemId};

/// One day of sales for an item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub quantity: u32,
}

impl SalesRecord {
    pub fn new(date: NaiveDate, quantity: u32) -> Self {
        Self { date, quantity }
    }
}

/// Sum of `quantity` over a sales history.
pub fn total_units(history: &[SalesRecord]) -> u64 {
    history.iter().map(|s| u64::from(s.quantity)).sum()
}

/// A trackable product.
///
/// Field names match the persisted JSON shape. `created_at` is fixed at
/// creation; `updated_at` moves on every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    id: ItemId,
    name: String,
    category: String,
    current_quantity: u32,
    min_required_quantity: u32,
    price: f64,
    #[serde(default)]
    sales_history: Vec<SalesRecord>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Input for creating an item (everything except identity and timestamps).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub current_quantity: u32,
    pub min_required_quantity: u32,
    pub price: f64,
    #[serde(default)]
    pub sales_history: Vec<SalesRecord>,
}

impl NewItem {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            current_quantity: 0,
            min_required_quantity: 0,
            price: 0.0,
            sales_history: Vec::new(),
        }
    }

    pub fn with_stock(mut self, current_quantity: u32, min_required_quantity: u32) -> Self {
        self.current_quantity = current_quantity;
        self.min_required_quantity = min_required_quantity;
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_sales_history(mut self, sales_history: Vec<SalesRecord>) -> Self {
        self.sales_history = sales_history;
        self
    }
}

/// Partial update of an item. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub current_quantity: Option<u32>,
    pub min_required_quantity: Option<u32>,
    pub price: Option<f64>,
    /// Replaces the whole history when present.
    pub sales_history: Option<Vec<SalesRecord>>,
}

impl ItemUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.current_quantity.is_none()
            && self.min_required_quantity.is_none()
            && self.price.is_none()
            && self.sales_history.is_none()
    }
}

impl InventoryItem {
    /// Build a new item with both timestamps set to `now`.
    pub fn create(id: ItemId, input: NewItem, now: DateTime<Utc>) -> DomainResult<Self> {
        validate_name(&input.name)?;
        validate_price(input.price)?;

        Ok(Self {
            id,
            name: input.name,
            category: input.category,
            current_quantity: input.current_quantity,
            min_required_quantity: input.min_required_quantity,
            price: input.price,
            sales_history: input.sales_history,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn current_quantity(&self) -> u32 {
        self.current_quantity
    }

    pub fn min_required_quantity(&self) -> u32 {
        self.min_required_quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn sales_history(&self) -> &[SalesRecord] {
        &self.sales_history
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Stock strictly under the configured minimum.
    pub fn is_below_minimum(&self) -> bool {
        self.current_quantity < self.min_required_quantity
    }

    /// Apply a partial update. Validation happens before any field changes,
    /// so a rejected update leaves the item untouched.
    pub fn apply(&mut self, update: ItemUpdate, now: DateTime<Utc>) -> DomainResult<()> {
        if update.is_empty() {
            return Err(DomainError::validation("update contains no fields"));
        }
        if let Some(name) = &update.name {
            validate_name(name)?;
        }
        if let Some(price) = update.price {
            validate_price(price)?;
        }

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(q) = update.current_quantity {
            self.current_quantity = q;
        }
        if let Some(q) = update.min_required_quantity {
            self.min_required_quantity = q;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(history) = update.sales_history {
            self.sales_history = history;
        }

        self.updated_at = now;
        Ok(())
    }
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }
    Ok(())
}

fn validate_price(price: f64) -> DomainResult<()> {
    if !(price.is_finite() && price >= 0.0) {
        return Err(DomainError::validation("price must be a finite, non-negative number"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn t0() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-01-15T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn keyboard() -> NewItem {
        NewItem::new("Wireless Mechanical Keyboard", "Electronics")
            .with_stock(45, 20)
            .with_price(129.99)
    }

    #[test]
    fn create_sets_both_timestamps() {
        let item = InventoryItem::create(ItemId::new(1), keyboard(), t0()).unwrap();
        assert_eq!(item.created_at(), t0());
        assert_eq!(item.updated_at(), t0());
        assert_eq!(item.current_quantity(), 45);
        assert!(!item.is_below_minimum());
    }

    #[test]
    fn create_rejects_blank_name() {
        let err = InventoryItem::create(ItemId::new(1), NewItem::new("  ", "x"), t0()).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn create_rejects_negative_price() {
        let err = InventoryItem::create(ItemId::new(1), keyboard().with_price(-1.0), t0()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn apply_refreshes_updated_at_only() {
        let mut item = InventoryItem::create(ItemId::new(1), keyboard(), t0()).unwrap();
        let later = t0() + Duration::hours(3);

        item.apply(
            ItemUpdate {
                current_quantity: Some(10),
                ..Default::default()
            },
            later,
        )
        .unwrap();

        assert_eq!(item.current_quantity(), 10);
        assert_eq!(item.created_at(), t0());
        assert_eq!(item.updated_at(), later);
        assert!(item.is_below_minimum());
    }

    #[test]
    fn rejected_update_leaves_item_untouched() {
        let mut item = InventoryItem::create(ItemId::new(1), keyboard(), t0()).unwrap();
        let before = item.clone();

        let err = item
            .apply(
                ItemUpdate {
                    current_quantity: Some(3),
                    price: Some(f64::NAN),
                    ..Default::default()
                },
                t0() + Duration::hours(1),
            )
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(item, before);
    }

    #[test]
    fn empty_update_is_rejected() {
        let mut item = InventoryItem::create(ItemId::new(1), keyboard(), t0()).unwrap();
        assert!(item.apply(ItemUpdate::default(), t0()).is_err());
    }

    #[test]
    fn total_units_sums_history() {
        let day = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let history = vec![SalesRecord::new(day, 4), SalesRecord::new(day.succ_opt().unwrap(), 6)];
        assert_eq!(total_units(&history), 10);
        assert_eq!(total_units(&[]), 0);
    }

    #[test]
    fn update_can_replace_sales_history() {
        let day = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let mut item = InventoryItem::create(
            ItemId::new(1),
            keyboard().with_sales_history(vec![SalesRecord::new(day, 5)]),
            t0(),
        )
        .unwrap();

        let update: ItemUpdate = serde_json::from_value(serde_json::json!({
            "sales_history": [{ "date": "2026-01-02", "quantity": 9 }]
        }))
        .unwrap();
        assert!(!update.is_empty());
        item.apply(update, t0() + Duration::hours(1)).unwrap();

        assert_eq!(item.sales_history(), &[SalesRecord::new(day.succ_opt().unwrap(), 9)]);
        assert_eq!(item.current_quantity(), 45);
    }

    #[test]
    fn serializes_with_snake_case_fields() {
        let day = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let item = InventoryItem::create(
            ItemId::new(3),
            keyboard().with_sales_history(vec![SalesRecord::new(day, 5)]),
            t0(),
        )
        .unwrap();

        let v = serde_json::to_value(&item).unwrap();
        assert_eq!(v["id"], 3);
        assert_eq!(v["current_quantity"], 45);
        assert_eq!(v["min_required_quantity"], 20);
        assert_eq!(v["sales_history"][0]["date"], "2026-01-01");
        assert_eq!(v["sales_history"][0]["quantity"], 5);

        let back: InventoryItem = serde_json::from_value(v).unwrap();
        assert_eq!(back, item);
    }
}
