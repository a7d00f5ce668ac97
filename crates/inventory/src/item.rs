use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockcast_core::RecordId;
use stockcast_engine::{mean, Queryable, SortValue, Summarize};

/// Inventory item identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryItemId(pub RecordId);

impl InventoryItemId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for InventoryItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Stock level classification shown as a badge in the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
    Overstock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in_stock",
            StockStatus::LowStock => "low_stock",
            StockStatus::OutOfStock => "out_of_stock",
            StockStatus::Overstock => "overstock",
        }
    }

    /// Low stock and out of stock both need purchasing attention.
    pub fn is_understocked(&self) -> bool {
        matches!(self, StockStatus::LowStock | StockStatus::OutOfStock)
    }
}

/// A stocked product as the inventory view displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub sku: String,
    pub name: String,
    pub category: String,
    pub warehouse: String,
    pub status: StockStatus,
    pub current_stock: i64,
    pub reorder_point: i64,
    pub unit_cost: f64,
    /// Estimated days the current stock lasts at the recent consumption rate.
    pub days_of_stock: f64,
    pub last_updated: DateTime<Utc>,
}

/// Categorical fields the inventory view can filter on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum InventoryFilter {
    Category,
    Status,
    Warehouse,
}

/// Sortable fields of the inventory view.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum InventorySort {
    #[default]
    Name,
    Sku,
    CurrentStock,
    UnitCost,
    DaysOfStock,
    LastUpdated,
}

impl Queryable for InventoryItem {
    type FilterField = InventoryFilter;
    type SortKey = InventorySort;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.sku]
    }

    fn filter_value(&self, field: InventoryFilter) -> &str {
        match field {
            InventoryFilter::Category => &self.category,
            InventoryFilter::Status => self.status.as_str(),
            InventoryFilter::Warehouse => &self.warehouse,
        }
    }

    fn sort_value(&self, key: InventorySort) -> SortValue<'_> {
        match key {
            InventorySort::Name => SortValue::Text(&self.name),
            InventorySort::Sku => SortValue::Text(&self.sku),
            InventorySort::CurrentStock => SortValue::Int(self.current_stock),
            InventorySort::UnitCost => SortValue::Float(self.unit_cost),
            InventorySort::DaysOfStock => SortValue::Float(self.days_of_stock),
            InventorySort::LastUpdated => SortValue::Time(self.last_updated),
        }
    }
}

/// At-a-glance inventory health, derived from the full collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total_count: usize,
    /// Σ unit cost × current stock.
    pub total_value: f64,
    /// Items that are low stock or out of stock.
    pub understocked_count: usize,
    pub out_of_stock_count: usize,
    pub overstock_count: usize,
    pub avg_days_of_stock: f64,
}

impl Summarize for InventoryItem {
    type Summary = InventorySummary;

    fn summarize(records: &[Self]) -> InventorySummary {
        let days: Vec<f64> = records.iter().map(|item| item.days_of_stock).collect();

        InventorySummary {
            total_count: records.len(),
            total_value: records
                .iter()
                .map(|item| item.unit_cost * item.current_stock as f64)
                .sum(),
            understocked_count: records
                .iter()
                .filter(|item| item.status.is_understocked())
                .count(),
            out_of_stock_count: records
                .iter()
                .filter(|item| item.status == StockStatus::OutOfStock)
                .count(),
            overstock_count: records
                .iter()
                .filter(|item| item.status == StockStatus::Overstock)
                .count(),
            avg_days_of_stock: mean(&days),
        }
    }
}
