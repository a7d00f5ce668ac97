//! Alert list view: record schema and summary metrics.

pub mod alert;

pub use alert::{
    Alert, AlertCategory, AlertFilter, AlertId, AlertSort, AlertStatus, AlertSummary, Severity,
};
