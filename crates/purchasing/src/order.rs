use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockcast_core::RecordId;
use stockcast_engine::{Queryable, SortValue, Summarize};

/// Purchase order identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PurchaseOrderId(pub RecordId);

impl PurchaseOrderId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for PurchaseOrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Purchase order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    PendingApproval,
    Approved,
    InTransit,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::PendingApproval => "pending_approval",
            OrderStatus::Approved => "approved",
            OrderStatus::InTransit => "in_transit",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// Urgency assigned when the order was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderPriority {
    Low,
    Normal,
    High,
    Urgent,
}

impl OrderPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderPriority::Low => "low",
            OrderPriority::Normal => "normal",
            OrderPriority::High => "high",
            OrderPriority::Urgent => "urgent",
        }
    }

    /// High and urgent orders surface in the rush counter.
    pub fn is_rush(&self) -> bool {
        matches!(self, OrderPriority::High | OrderPriority::Urgent)
    }
}

/// Whether the reorder engine raised the order or a person did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderOrigin {
    Automatic,
    Manual,
}

impl OrderOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderOrigin::Automatic => "automatic",
            OrderOrigin::Manual => "manual",
        }
    }
}

/// A purchase order as the orders view displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: PurchaseOrderId,
    pub order_number: String,
    pub supplier: String,
    pub status: OrderStatus,
    pub priority: OrderPriority,
    pub origin: OrderOrigin,
    pub total_amount: f64,
    pub line_count: u32,
    pub created_at: DateTime<Utc>,
    /// Promised delivery date; `None` until the supplier confirms one.
    pub expected_date: Option<DateTime<Utc>>,
}

/// Categorical fields the orders view can filter on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OrderFilter {
    Status,
    Priority,
    Origin,
    Supplier,
}

/// Sortable fields of the orders view.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OrderSort {
    #[default]
    CreatedAt,
    OrderNumber,
    Supplier,
    TotalAmount,
    ExpectedDate,
}

impl Queryable for PurchaseOrder {
    type FilterField = OrderFilter;
    type SortKey = OrderSort;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.order_number, &self.supplier]
    }

    fn filter_value(&self, field: OrderFilter) -> &str {
        match field {
            OrderFilter::Status => self.status.as_str(),
            OrderFilter::Priority => self.priority.as_str(),
            OrderFilter::Origin => self.origin.as_str(),
            OrderFilter::Supplier => &self.supplier,
        }
    }

    fn sort_value(&self, key: OrderSort) -> SortValue<'_> {
        match key {
            OrderSort::CreatedAt => SortValue::Time(self.created_at),
            OrderSort::OrderNumber => SortValue::Text(&self.order_number),
            OrderSort::Supplier => SortValue::Text(&self.supplier),
            OrderSort::TotalAmount => SortValue::Float(self.total_amount),
            // Unconfirmed dates sort after every confirmed one.
            OrderSort::ExpectedDate => {
                SortValue::MaybeInt(self.expected_date.map(|d| d.timestamp()))
            }
        }
    }
}

/// At-a-glance purchasing health, derived from the full collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderSummary {
    pub total_count: usize,
    /// Σ order totals.
    pub total_amount: f64,
    pub pending_approval_count: usize,
    pub automatic_count: usize,
    pub manual_count: usize,
    /// Orders at high or urgent priority.
    pub rush_count: usize,
}

impl Summarize for PurchaseOrder {
    type Summary = PurchaseOrderSummary;

    fn summarize(records: &[Self]) -> PurchaseOrderSummary {
        let automatic_count = records
            .iter()
            .filter(|order| order.origin == OrderOrigin::Automatic)
            .count();

        PurchaseOrderSummary {
            total_count: records.len(),
            total_amount: records.iter().map(|order| order.total_amount).sum(),
            pending_approval_count: records
                .iter()
                .filter(|order| order.status == OrderStatus::PendingApproval)
                .count(),
            automatic_count,
            manual_count: records.len() - automatic_count,
            rush_count: records
                .iter()
                .filter(|order| order.priority.is_rush())
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use stockcast_engine::{apply_filters, ActiveFilters};

    fn order(
        number: &str,
        status: OrderStatus,
        priority: OrderPriority,
        origin: OrderOrigin,
        amount: f64,
    ) -> PurchaseOrder {
        PurchaseOrder {
            id: PurchaseOrderId::new(RecordId::new()),
            order_number: number.to_string(),
            supplier: "Acme Supply Co".to_string(),
            status,
            priority,
            origin,
            total_amount: amount,
            line_count: 3,
            created_at: Utc.with_ymd_and_hms(2024, 5, 20, 11, 0, 0).unwrap(),
            expected_date: None,
        }
    }

    fn demo_collection() -> Vec<PurchaseOrder> {
        vec![
            order(
                "PO-2024-0001",
                OrderStatus::PendingApproval,
                OrderPriority::Normal,
                OrderOrigin::Automatic,
                1_200.0,
            ),
            order(
                "PO-2024-0002",
                OrderStatus::Approved,
                OrderPriority::High,
                OrderOrigin::Manual,
                860.0,
            ),
            order(
                "PO-2024-0003",
                OrderStatus::PendingApproval,
                OrderPriority::High,
                OrderOrigin::Automatic,
                2_340.0,
            ),
            order(
                "PO-2024-0004",
                OrderStatus::Delivered,
                OrderPriority::Urgent,
                OrderOrigin::Manual,
                410.0,
            ),
            order(
                "PO-2024-0005",
                OrderStatus::InTransit,
                OrderPriority::Low,
                OrderOrigin::Automatic,
                95.5,
            ),
        ]
    }

    #[test]
    fn pending_approval_and_high_priority_isolates_one_order() {
        let orders = demo_collection();

        let mut filters = ActiveFilters::new();
        filters.set_equals(OrderFilter::Status, "pending_approval");
        filters.set_equals(OrderFilter::Priority, "high");

        let narrowed = apply_filters(&orders, &filters);
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed[0].order_number, "PO-2024-0003");
    }

    #[test]
    fn summary_splits_origin_and_counts_rush_orders() {
        let orders = demo_collection();
        let summary = PurchaseOrder::summarize(&orders);

        assert_eq!(summary.total_count, 5);
        assert_eq!(summary.pending_approval_count, 2);
        assert_eq!(summary.automatic_count, 3);
        assert_eq!(summary.manual_count, 2);
        assert_eq!(summary.rush_count, 3);
        assert_eq!(summary.total_amount, 4_905.5);
    }
}
