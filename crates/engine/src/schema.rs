//! Per-kind schema: what the engine needs to know about a record kind.

use core::cmp::Ordering;
use core::hash::Hash;

use chrono::{DateTime, Utc};

/// A typed sort cell extracted from one record field.
///
/// The variant fixes the natural ordering: lexicographic for text, numeric
/// for counts and amounts, chronological for timestamps.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue<'a> {
    Text(&'a str),
    Int(i64),
    Float(f64),
    Time(DateTime<Utc>),
    /// Nullable count (e.g. "days until depletion" when no depletion
    /// applies). `None` compares as `i64::MAX`, so unaffected records land
    /// last ascending and first descending.
    MaybeInt(Option<i64>),
}

impl SortValue<'_> {
    /// Total order over sort cells of the same variant.
    ///
    /// A given sort key always produces the same variant for every record of
    /// a kind, so mismatched variants cannot occur through [`Queryable`];
    /// they compare as equal rather than panicking.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            (SortValue::Int(a), SortValue::Int(b)) => a.cmp(b),
            (SortValue::Float(a), SortValue::Float(b)) => a.total_cmp(b),
            (SortValue::Time(a), SortValue::Time(b)) => a.cmp(b),
            (SortValue::MaybeInt(a), SortValue::MaybeInt(b)) => {
                a.unwrap_or(i64::MAX).cmp(&b.unwrap_or(i64::MAX))
            }
            _ => Ordering::Equal,
        }
    }
}

/// Schema a record kind exposes to the query engine.
///
/// Implementing this trait is the entire per-view configuration: which
/// string fields free-text search scans, which categorical fields can be
/// filtered, and which fields can order the list. Filter fields and sort
/// keys are enums, so an unknown field is unrepresentable.
pub trait Queryable: Clone {
    /// Categorical fields the view can filter on.
    type FilterField: Copy + Eq + Hash + core::fmt::Debug;

    /// Fields the view can sort by. `Default` is the view's initial key.
    type SortKey: Copy + Eq + core::fmt::Debug + Default;

    /// String fields scanned by free-text search (name/title plus the
    /// human-facing identifier code).
    fn search_fields(&self) -> Vec<&str>;

    /// The record's current value for a categorical field, as the exact
    /// string filters compare against.
    fn filter_value(&self, field: Self::FilterField) -> &str;

    /// The record's sort cell for a sort key.
    fn sort_value(&self, key: Self::SortKey) -> SortValue<'_>;
}
