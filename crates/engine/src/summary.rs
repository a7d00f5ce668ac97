//! Summary metrics: fixed scalar aggregates per record kind.

/// Derive a record kind's at-a-glance metrics from a collection.
///
/// Summaries are computed over the **full** collection, not the filtered
/// view: they describe overall health independent of whatever the user is
/// currently narrowing the list to. Views recompute them once per
/// load/refresh, never per keystroke.
pub trait Summarize: Sized {
    type Summary: Clone + core::fmt::Debug + PartialEq;

    /// Deterministic for a given collection. Must be total: aggregates over
    /// an empty collection are zero, never NaN or an error.
    fn summarize(records: &[Self]) -> Self::Summary;
}

/// Arithmetic mean. An empty slice yields `0.0` rather than NaN.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / (values.len() as f64)
}
