//! Report list view: record schema and summary metrics.

pub mod report;

pub use report::{
    Report, ReportFilter, ReportFormat, ReportId, ReportKind, ReportSort, ReportStatus,
    ReportSummary,
};
