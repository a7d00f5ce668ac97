use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockcast_core::RecordId;
use stockcast_engine::{Queryable, SortValue, Summarize};

/// Report identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(pub RecordId);

impl ReportId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ReportId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Subject area a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Inventory,
    Forecasting,
    Purchasing,
    Performance,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Inventory => "inventory",
            ReportKind::Forecasting => "forecasting",
            ReportKind::Purchasing => "purchasing",
            ReportKind::Performance => "performance",
        }
    }
}

/// Export format of a generated report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Pdf,
    Csv,
    Xlsx,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Csv => "csv",
            ReportFormat::Xlsx => "xlsx",
        }
    }
}

/// Where a report is in its generation lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Ready,
    Scheduled,
    Generating,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Ready => "ready",
            ReportStatus::Scheduled => "scheduled",
            ReportStatus::Generating => "generating",
        }
    }
}

/// A generated or scheduled report as the reports view displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: ReportId,
    pub code: String,
    pub name: String,
    pub kind: ReportKind,
    pub format: ReportFormat,
    pub status: ReportStatus,
    pub size_kb: f64,
    pub generated_at: DateTime<Utc>,
}

/// Categorical fields the reports view can filter on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ReportFilter {
    Kind,
    Format,
    Status,
}

/// Sortable fields of the reports view.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ReportSort {
    #[default]
    GeneratedAt,
    Name,
    SizeKb,
}

impl Queryable for Report {
    type FilterField = ReportFilter;
    type SortKey = ReportSort;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.code]
    }

    fn filter_value(&self, field: ReportFilter) -> &str {
        match field {
            ReportFilter::Kind => self.kind.as_str(),
            ReportFilter::Format => self.format.as_str(),
            ReportFilter::Status => self.status.as_str(),
        }
    }

    fn sort_value(&self, key: ReportSort) -> SortValue<'_> {
        match key {
            ReportSort::GeneratedAt => SortValue::Time(self.generated_at),
            ReportSort::Name => SortValue::Text(&self.name),
            ReportSort::SizeKb => SortValue::Float(self.size_kb),
        }
    }
}

/// At-a-glance report shelf state, derived from the full collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_count: usize,
    pub ready_count: usize,
    pub scheduled_count: usize,
    pub total_size_kb: f64,
}

impl Summarize for Report {
    type Summary = ReportSummary;

    fn summarize(records: &[Self]) -> ReportSummary {
        ReportSummary {
            total_count: records.len(),
            ready_count: records
                .iter()
                .filter(|r| r.status == ReportStatus::Ready)
                .count(),
            scheduled_count: records
                .iter()
                .filter(|r| r.status == ReportStatus::Scheduled)
                .count(),
            total_size_kb: records.iter().map(|r| r.size_kb).sum(),
        }
    }
}
