use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use stockcast_core::RecordId;
use stockcast_engine::{Queryable, SortValue, Summarize};

/// Alert identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertId(pub RecordId);

impl AlertId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for AlertId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// How loud the alert badge is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }

    /// Ordinal used when sorting by severity (critical highest).
    pub fn rank(&self) -> i64 {
        match self {
            Severity::Info => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
        }
    }
}

/// Subsystem the alert originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertCategory {
    Stock,
    Forecast,
    Orders,
    System,
}

impl AlertCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertCategory::Stock => "stock",
            AlertCategory::Forecast => "forecast",
            AlertCategory::Orders => "orders",
            AlertCategory::System => "system",
        }
    }
}

/// Triage state of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Active,
    Acknowledged,
    Resolved,
}

impl AlertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::Active => "active",
            AlertStatus::Acknowledged => "acknowledged",
            AlertStatus::Resolved => "resolved",
        }
    }
}

/// An operational alert as the alerts view displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: AlertId,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub category: AlertCategory,
    pub status: AlertStatus,
    pub raised_at: DateTime<Utc>,
}

/// Categorical fields the alerts view can filter on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AlertFilter {
    Severity,
    Category,
    Status,
}

/// Sortable fields of the alerts view.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum AlertSort {
    #[default]
    RaisedAt,
    Severity,
    Title,
}

impl Queryable for Alert {
    type FilterField = AlertFilter;
    type SortKey = AlertSort;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.message]
    }

    fn filter_value(&self, field: AlertFilter) -> &str {
        match field {
            AlertFilter::Severity => self.severity.as_str(),
            AlertFilter::Category => self.category.as_str(),
            AlertFilter::Status => self.status.as_str(),
        }
    }

    fn sort_value(&self, key: AlertSort) -> SortValue<'_> {
        match key {
            AlertSort::RaisedAt => SortValue::Time(self.raised_at),
            AlertSort::Severity => SortValue::Int(self.severity.rank()),
            AlertSort::Title => SortValue::Text(&self.title),
        }
    }
}

/// At-a-glance alert pressure, derived from the full collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertSummary {
    pub total_count: usize,
    pub critical_count: usize,
    /// Active plus acknowledged (everything not yet resolved).
    pub unresolved_count: usize,
    /// Alerts raised within 24h of the collection's newest alert.
    pub last_day_count: usize,
}

impl Summarize for Alert {
    type Summary = AlertSummary;

    fn summarize(records: &[Self]) -> AlertSummary {
        // Anchor recency on the newest record, not the wall clock, so the
        // summary stays deterministic for a given collection.
        let newest = records.iter().map(|a| a.raised_at).max();
        let last_day_count = match newest {
            Some(newest) => records
                .iter()
                .filter(|a| newest - a.raised_at <= Duration::hours(24))
                .count(),
            None => 0,
        };

        AlertSummary {
            total_count: records.len(),
            critical_count: records
                .iter()
                .filter(|a| a.severity == Severity::Critical)
                .count(),
            unresolved_count: records
                .iter()
                .filter(|a| a.status != AlertStatus::Resolved)
                .count(),
            last_day_count,
        }
    }
}
