use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use invtrack_core::{DomainError, DomainResult, ItemId};

use crate::item::{InventoryItem, ItemUpdate, NewItem};

/// The full inventory list, newest items first.
///
/// This is the collection the dashboard edits and persists as a whole.
/// It assigns identifiers (`max + 1`, or `1` when empty) and owns timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<InventoryItem>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<InventoryItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&InventoryItem> {
        self.items.iter().find(|i| i.id() == id)
    }

    /// Identifier the next `add` will use.
    pub fn next_id(&self) -> ItemId {
        self.items
            .iter()
            .map(InventoryItem::id)
            .max()
            .map(|id| id.next())
            .unwrap_or(ItemId::new(1))
    }

    /// Create an item and insert it at the front of the list.
    pub fn add(&mut self, input: NewItem, now: DateTime<Utc>) -> DomainResult<&InventoryItem> {
        let item = InventoryItem::create(self.next_id(), input, now)?;
        self.items.insert(0, item);
        Ok(&self.items[0])
    }

    pub fn update(
        &mut self,
        id: ItemId,
        update: ItemUpdate,
        now: DateTime<Utc>,
    ) -> DomainResult<&InventoryItem> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id() == id)
            .ok_or_else(DomainError::not_found)?;
        item.apply(update, now)?;
        Ok(item)
    }

    pub fn remove(&mut self, id: ItemId) -> DomainResult<InventoryItem> {
        let pos = self
            .items
            .iter()
            .position(|i| i.id() == id)
            .ok_or_else(DomainError::not_found)?;
        Ok(self.items.remove(pos))
    }

    /// Items ordered by name (ascending), ties broken by id.
    pub fn sorted_by_name(&self) -> Vec<&InventoryItem> {
        let mut out: Vec<&InventoryItem> = self.items.iter().collect();
        out.sort_by(|a, b| {
            a.name()
                .cmp(b.name())
                .then_with(|| a.id().cmp(&b.id()))
        });
        out
    }

    pub fn low_stock(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.iter().filter(|i| i.is_below_minimum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn t0() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-03-01T08:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn item(name: &str, current: u32, min: u32) -> NewItem {
        NewItem::new(name, "General").with_stock(current, min).with_price(10.0)
    }

    #[test]
    fn first_item_gets_id_one() {
        let mut inv = Inventory::new();
        let id = inv.add(item("Chair", 1, 1), t0()).unwrap().id();
        assert_eq!(id, ItemId::new(1));
    }

    #[test]
    fn ids_follow_the_maximum_not_the_length() {
        let mut inv = Inventory::new();
        inv.add(item("A", 1, 1), t0()).unwrap();
        inv.add(item("B", 1, 1), t0()).unwrap();
        inv.add(item("C", 1, 1), t0()).unwrap();
        inv.remove(ItemId::new(1)).unwrap();

        let id = inv.add(item("D", 1, 1), t0()).unwrap().id();
        assert_eq!(id, ItemId::new(4));
    }

    #[test]
    fn new_items_go_to_the_front() {
        let mut inv = Inventory::new();
        inv.add(item("Old", 1, 1), t0()).unwrap();
        inv.add(item("New", 1, 1), t0()).unwrap();
        assert_eq!(inv.items()[0].name(), "New");
    }

    #[test]
    fn update_refreshes_timestamp() {
        let mut inv = Inventory::new();
        inv.add(item("Hub", 120, 50), t0()).unwrap();
        let later = t0() + Duration::minutes(5);

        let updated = inv
            .update(
                ItemId::new(1),
                ItemUpdate {
                    price: Some(79.0),
                    ..Default::default()
                },
                later,
            )
            .unwrap();

        assert_eq!(updated.price(), 79.0);
        assert_eq!(updated.updated_at(), later);
        assert_eq!(updated.created_at(), t0());
    }

    #[test]
    fn update_and_remove_unknown_id_is_not_found() {
        let mut inv = Inventory::new();
        let err = inv
            .update(
                ItemId::new(9),
                ItemUpdate {
                    current_quantity: Some(1),
                    ..Default::default()
                },
                t0(),
            )
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound);
        assert_eq!(inv.remove(ItemId::new(9)).unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn sorted_by_name_is_ascending() {
        let mut inv = Inventory::new();
        inv.add(item("USB-C Hub", 1, 1), t0()).unwrap();
        inv.add(item("Chair", 1, 1), t0()).unwrap();
        inv.add(item("Keyboard", 1, 1), t0()).unwrap();

        let names: Vec<&str> = inv.sorted_by_name().iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["Chair", "Keyboard", "USB-C Hub"]);
    }

    #[test]
    fn low_stock_uses_strict_comparison() {
        let mut inv = Inventory::new();
        inv.add(item("At minimum", 10, 10), t0()).unwrap();
        inv.add(item("Below", 9, 10), t0()).unwrap();

        let low: Vec<&str> = inv.low_stock().map(|i| i.name()).collect();
        assert_eq!(low, vec!["Below"]);
    }

    #[test]
    fn serializes_as_plain_array() {
        let mut inv = Inventory::new();
        inv.add(item("Chair", 8, 15), t0()).unwrap();
        let v = serde_json::to_value(&inv).unwrap();
        assert!(v.is_array());
        assert_eq!(v[0]["name"], "Chair");
    }
}
