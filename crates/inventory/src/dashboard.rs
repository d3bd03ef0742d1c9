//! Dashboard KPIs derived from the inventory list.

use serde::{Deserialize, Serialize};

use crate::catalog::Inventory;

/// Chart labels longer than this are shortened.
const LABEL_MAX_CHARS: usize = 12;
/// Characters kept when a label is shortened (before the ellipsis).
const LABEL_KEEP_CHARS: usize = 10;

/// One bar of the stock-level chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    pub name: String,
    pub qty: u32,
    pub min: u32,
}

impl StockLevel {
    pub fn is_below_minimum(&self) -> bool {
        self.qty < self.min
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_items: usize,
    pub critical_alerts: usize,
    pub chart: Vec<StockLevel>,
}

impl DashboardStats {
    pub fn from_inventory(inventory: &Inventory) -> Self {
        let chart = inventory
            .items()
            .iter()
            .map(|item| StockLevel {
                name: chart_label(item.name()),
                qty: item.current_quantity(),
                min: item.min_required_quantity(),
            })
            .collect();

        Self {
            total_items: inventory.len(),
            critical_alerts: inventory.low_stock().count(),
            chart,
        }
    }
}

fn chart_label(name: &str) -> String {
    if name.chars().count() > LABEL_MAX_CHARS {
        let head: String = name.chars().take(LABEL_KEEP_CHARS).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}
