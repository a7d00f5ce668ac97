use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockcast_core::RecordId;
use stockcast_engine::{mean, Queryable, SortValue, Summarize};

/// A forecast whose depletion countdown is at or below this many days is
/// counted as at risk in the summary strip.
pub const CRITICAL_DEPLETION_DAYS: i64 = 7;

/// Forecast identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ForecastId(pub RecordId);

impl ForecastId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ForecastId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Demand direction over the forecast horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Rising,
    Stable,
    Declining,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Rising => "rising",
            Trend::Stable => "stable",
            Trend::Declining => "declining",
        }
    }
}

/// How much the model trusts its own prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

/// A per-product demand forecast as the forecasts view displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub id: ForecastId,
    pub sku: String,
    pub product_name: String,
    pub trend: Trend,
    pub confidence: Confidence,
    /// Backtested accuracy of this product's model, in percent.
    pub accuracy: f64,
    /// Units expected to move over the forecast horizon.
    pub predicted_demand: i64,
    /// Days until stock runs out; `None` when no depletion risk applies.
    pub days_to_depletion: Option<i64>,
    pub suggested_reorder_qty: i64,
    pub generated_at: DateTime<Utc>,
}

impl Forecast {
    /// Whether the depletion countdown is at or below the critical window.
    pub fn is_at_risk(&self) -> bool {
        self.days_to_depletion
            .is_some_and(|days| days <= CRITICAL_DEPLETION_DAYS)
    }
}

/// Categorical fields the forecasts view can filter on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ForecastFilter {
    Trend,
    Confidence,
}

/// Sortable fields of the forecasts view.
///
/// The default puts the shortest depletion countdown first; records with no
/// depletion risk sort last.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ForecastSort {
    #[default]
    DaysToDepletion,
    ProductName,
    Accuracy,
    PredictedDemand,
    GeneratedAt,
}

impl Queryable for Forecast {
    type FilterField = ForecastFilter;
    type SortKey = ForecastSort;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.product_name, &self.sku]
    }

    fn filter_value(&self, field: ForecastFilter) -> &str {
        match field {
            ForecastFilter::Trend => self.trend.as_str(),
            ForecastFilter::Confidence => self.confidence.as_str(),
        }
    }

    fn sort_value(&self, key: ForecastSort) -> SortValue<'_> {
        match key {
            ForecastSort::DaysToDepletion => SortValue::MaybeInt(self.days_to_depletion),
            ForecastSort::ProductName => SortValue::Text(&self.product_name),
            ForecastSort::Accuracy => SortValue::Float(self.accuracy),
            ForecastSort::PredictedDemand => SortValue::Int(self.predicted_demand),
            ForecastSort::GeneratedAt => SortValue::Time(self.generated_at),
        }
    }
}

/// At-a-glance forecast health, derived from the full collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub total_count: usize,
    pub avg_accuracy: f64,
    /// Forecasts with a depletion countdown at or below the critical window.
    pub at_risk_count: usize,
    /// Σ suggested reorder quantities.
    pub suggested_reorder_total: i64,
}

impl Summarize for Forecast {
    type Summary = ForecastSummary;

    fn summarize(records: &[Self]) -> ForecastSummary {
        let accuracies: Vec<f64> = records.iter().map(|f| f.accuracy).collect();

        ForecastSummary {
            total_count: records.len(),
            avg_accuracy: mean(&accuracies),
            at_risk_count: records.iter().filter(|f| f.is_at_risk()).count(),
            suggested_reorder_total: records.iter().map(|f| f.suggested_reorder_qty).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use stockcast_engine::{sort_records, SortDirection};

    fn forecast(sku: &str, days_to_depletion: Option<i64>, accuracy: f64) -> Forecast {
        Forecast {
            id: ForecastId::new(RecordId::new()),
            sku: sku.to_string(),
            product_name: format!("product {sku}"),
            trend: Trend::Stable,
            confidence: Confidence::Medium,
            accuracy,
            predicted_demand: 200,
            days_to_depletion,
            suggested_reorder_qty: 50,
            generated_at: Utc.with_ymd_and_hms(2024, 6, 1, 6, 30, 0).unwrap(),
        }
    }

    #[test]
    fn no_depletion_risk_sorts_last_ascending() {
        let records = vec![
            forecast("TECH-001", Some(14), 91.0),
            forecast("HOME-007", None, 88.0),
            forecast("FASH-002", Some(3), 79.5),
            forecast("TECH-014", Some(45), 95.2),
        ];

        let sorted = sort_records(
            &records,
            ForecastSort::DaysToDepletion,
            SortDirection::Ascending,
        );
        let skus: Vec<_> = sorted.iter().map(|f| f.sku.as_str()).collect();
        assert_eq!(skus, ["FASH-002", "TECH-001", "TECH-014", "HOME-007"]);
    }

    #[test]
    fn at_risk_includes_the_critical_boundary() {
        let records = vec![
            forecast("A", Some(CRITICAL_DEPLETION_DAYS), 90.0),
            forecast("B", Some(CRITICAL_DEPLETION_DAYS + 1), 90.0),
            forecast("C", None, 90.0),
        ];

        let summary = Forecast::summarize(&records);
        assert_eq!(summary.at_risk_count, 1);
    }

    #[test]
    fn summary_averages_accuracy_and_sums_reorders() {
        let records = vec![
            forecast("A", Some(10), 80.0),
            forecast("B", Some(20), 90.0),
        ];

        let summary = Forecast::summarize(&records);
        assert_eq!(summary.total_count, 2);
        assert_eq!(summary.avg_accuracy, 85.0);
        assert_eq!(summary.suggested_reorder_total, 100);
    }

    #[test]
    fn empty_collection_has_zero_accuracy_not_nan() {
        let summary = Forecast::summarize(&[]);
        assert_eq!(summary.avg_accuracy, 0.0);
        assert_eq!(summary.suggested_reorder_total, 0);
    }
}
