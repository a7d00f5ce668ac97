//! Query state: the user-driven inputs of a dashboard list view.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::schema::Queryable;

/// Sort direction for the view's active sort key.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Selected value for one categorical filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterValue {
    /// The "all" sentinel: no constraint on this field.
    All,
    /// Keep only records whose field equals this value exactly.
    Is(String),
}

impl FilterValue {
    pub fn is(value: impl Into<String>) -> Self {
        Self::Is(value.into())
    }
}

/// The set of categorical filters currently applied to a view.
///
/// Absent fields and fields set to [`FilterValue::All`] are no-ops; the
/// rest compose conjunctively. Insertion order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveFilters<F: Copy + Eq + Hash> {
    selected: HashMap<F, FilterValue>,
}

impl<F: Copy + Eq + Hash> ActiveFilters<F> {
    pub fn new() -> Self {
        Self {
            selected: HashMap::new(),
        }
    }

    /// Set a field's selection, replacing any previous one.
    pub fn set(&mut self, field: F, value: FilterValue) -> &mut Self {
        self.selected.insert(field, value);
        self
    }

    /// Shorthand for `set(field, FilterValue::Is(value))`.
    pub fn set_equals(&mut self, field: F, value: impl Into<String>) -> &mut Self {
        self.set(field, FilterValue::is(value))
    }

    /// Drop a field's selection entirely (equivalent to `All`).
    pub fn clear(&mut self, field: F) -> &mut Self {
        self.selected.remove(&field);
        self
    }

    /// Number of constraining (non-`All`) selections.
    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// Iterate over the constraining selections.
    pub fn active(&self) -> impl Iterator<Item = (F, &str)> {
        self.selected.iter().filter_map(|(field, value)| match value {
            FilterValue::All => None,
            FilterValue::Is(v) => Some((*field, v.as_str())),
        })
    }

    /// Whether a record passes every active filter (logical AND).
    pub fn matches<R>(&self, record: &R) -> bool
    where
        R: Queryable<FilterField = F>,
    {
        self.active()
            .all(|(field, want)| record.filter_value(field) == want)
    }
}

/// Everything the user controls about a list view, bundled.
///
/// Created with defaults on view mount (empty search, no filters, the
/// kind's default sort key ascending) and mutated only by user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState<F: Copy + Eq + Hash, K> {
    pub search: String,
    pub filters: ActiveFilters<F>,
    pub sort: K,
    pub direction: SortDirection,
}

impl<F: Copy + Eq + Hash, K: Default> Default for QueryState<F, K> {
    fn default() -> Self {
        Self {
            search: String::new(),
            filters: ActiveFilters::new(),
            sort: K::default(),
            direction: SortDirection::default(),
        }
    }
}

impl<F: Copy + Eq + Hash, K> QueryState<F, K> {
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn with_filter(mut self, field: F, value: FilterValue) -> Self {
        self.filters.set(field, value);
        self
    }

    pub fn with_sort(mut self, key: K, direction: SortDirection) -> Self {
        self.sort = key;
        self.direction = direction;
        self
    }
}
