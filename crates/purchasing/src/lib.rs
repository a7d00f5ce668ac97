//! Purchase order list view: record schema and summary metrics.
//!
//! Orders are either raised automatically from forecast reorder suggestions
//! or entered manually; the summary strip reports the split.

pub mod order;

pub use order::{
    OrderFilter, OrderOrigin, OrderPriority, OrderSort, OrderStatus, PurchaseOrder,
    PurchaseOrderId, PurchaseOrderSummary,
};
