//! Forecast list view: record schema and summary metrics.
//!
//! Demand forecasts are produced elsewhere and arrive as finished records;
//! this crate only shapes them for display (no prediction logic).

pub mod forecast;

pub use forecast::{
    Confidence, Forecast, ForecastFilter, ForecastId, ForecastSort, ForecastSummary, Trend,
    CRITICAL_DEPLETION_DAYS,
};
