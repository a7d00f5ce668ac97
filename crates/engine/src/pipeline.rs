//! The predicate/sort pipeline every list view runs on query-state change.
//!
//! All operations are pure functions from `&[R]` to a fresh `Vec<R>`:
//! search and filter return order-preserving subsequences, sort returns a
//! reordered copy, and the input slice is never touched.

use crate::query::{ActiveFilters, QueryState, SortDirection};
use crate::schema::Queryable;

/// Case-insensitive substring search over the kind's search fields.
///
/// Empty or whitespace-only text matches everything. Output preserves the
/// input order.
pub fn search<R: Queryable>(records: &[R], text: &str) -> Vec<R> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| {
            record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Keep the records passing every active filter (exact equality, AND).
///
/// Output preserves the input order.
pub fn apply_filters<R: Queryable>(
    records: &[R],
    filters: &ActiveFilters<R::FilterField>,
) -> Vec<R> {
    records
        .iter()
        .filter(|record| filters.matches(*record))
        .cloned()
        .collect()
}

/// Order a collection by one sort key.
///
/// The sort is stable: ties keep their original (load-time) order in both
/// directions. Returns a fully ordered copy; the input is left unmodified.
pub fn sort_records<R: Queryable>(
    records: &[R],
    key: R::SortKey,
    direction: SortDirection,
) -> Vec<R> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = a.sort_value(key).compare(&b.sort_value(key));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

/// The composed pipeline: `sort(apply_filters(search(records)))`.
///
/// Summary metrics are intentionally **not** part of this call; they are
/// derived from the full collection once per load, not per keystroke.
pub fn run_query<R: Queryable>(
    records: &[R],
    query: &QueryState<R::FilterField, R::SortKey>,
) -> Vec<R> {
    let found = search(records, &query.search);
    let narrowed = apply_filters(&found, &query.filters);
    sort_records(&narrowed, query.sort, query.direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::FilterValue;
    use crate::schema::SortValue;

    /// Minimal record kind exercising every sort-cell variant.
    #[derive(Debug, Clone, PartialEq)]
    struct Ticket {
        code: String,
        title: String,
        state: &'static str,
        lane: &'static str,
        points: i64,
        idle_days: Option<i64>,
    }

    fn ticket(code: &str, title: &str, state: &'static str, points: i64) -> Ticket {
        Ticket {
            code: code.to_string(),
            title: title.to_string(),
            state,
            lane: "default",
            points,
            idle_days: None,
        }
    }

    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    enum TicketFilter {
        State,
        Lane,
    }

    #[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
    enum TicketSort {
        #[default]
        Code,
        Points,
        IdleDays,
    }

    impl Queryable for Ticket {
        type FilterField = TicketFilter;
        type SortKey = TicketSort;

        fn search_fields(&self) -> Vec<&str> {
            vec![&self.title, &self.code]
        }

        fn filter_value(&self, field: TicketFilter) -> &str {
            match field {
                TicketFilter::State => self.state,
                TicketFilter::Lane => self.lane,
            }
        }

        fn sort_value(&self, key: TicketSort) -> SortValue<'_> {
            match key {
                TicketSort::Code => SortValue::Text(&self.code),
                TicketSort::Points => SortValue::Int(self.points),
                TicketSort::IdleDays => SortValue::MaybeInt(self.idle_days),
            }
        }
    }

    fn fixture() -> Vec<Ticket> {
        vec![
            ticket("T-003", "Fix pagination", "open", 3),
            ticket("T-001", "Update banner", "closed", 1),
            ticket("T-002", "Rotate keys", "open", 5),
            ticket("T-004", "Audit roles", "open", 3),
        ]
    }

    #[test]
    fn empty_search_returns_everything() {
        let records = fixture();
        assert_eq!(search(&records, ""), records);
        assert_eq!(search(&records, "   "), records);
    }

    #[test]
    fn search_is_case_insensitive_and_order_preserving() {
        let records = fixture();

        let hits = search(&records, "ROTATE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code, "T-002");

        // Matches the code field too, preserving load order.
        let hits = search(&records, "t-00");
        let codes: Vec<_> = hits.iter().map(|t| t.code.as_str()).collect();
        assert_eq!(codes, ["T-003", "T-001", "T-002", "T-004"]);
    }

    #[test]
    fn filters_compose_conjunctively() {
        let mut records = fixture();
        records[2].lane = "security";

        let mut filters = ActiveFilters::new();
        filters.set_equals(TicketFilter::State, "open");
        let open = apply_filters(&records, &filters);
        assert_eq!(open.len(), 3);

        filters.set_equals(TicketFilter::Lane, "security");
        let narrowed = apply_filters(&records, &filters);
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed[0].code, "T-002");
    }

    #[test]
    fn all_sentinel_is_a_no_op() {
        let records = fixture();
        let mut filters = ActiveFilters::new();
        filters.set(TicketFilter::State, FilterValue::All);
        assert_eq!(apply_filters(&records, &filters), records);
    }

    #[test]
    fn sort_orders_and_leaves_input_unmodified() {
        let records = fixture();
        let before = records.clone();

        let sorted = sort_records(&records, TicketSort::Code, SortDirection::Ascending);
        let codes: Vec<_> = sorted.iter().map(|t| t.code.as_str()).collect();
        assert_eq!(codes, ["T-001", "T-002", "T-003", "T-004"]);
        assert_eq!(records, before);
    }

    #[test]
    fn sort_is_stable_on_ties() {
        let records = fixture();

        // T-003 and T-004 both have 3 points; load order must hold.
        let sorted = sort_records(&records, TicketSort::Points, SortDirection::Ascending);
        let codes: Vec<_> = sorted.iter().map(|t| t.code.as_str()).collect();
        assert_eq!(codes, ["T-001", "T-003", "T-004", "T-002"]);

        let sorted = sort_records(&records, TicketSort::Points, SortDirection::Descending);
        let codes: Vec<_> = sorted.iter().map(|t| t.code.as_str()).collect();
        assert_eq!(codes, ["T-002", "T-003", "T-004", "T-001"]);
    }

    #[test]
    fn nullable_key_sorts_last_ascending_first_descending() {
        let mut records = fixture();
        records[0].idle_days = Some(12);
        records[1].idle_days = Some(2);
        records[3].idle_days = Some(7);
        // records[2] stays None: no idle time applies.

        let sorted = sort_records(&records, TicketSort::IdleDays, SortDirection::Ascending);
        let codes: Vec<_> = sorted.iter().map(|t| t.code.as_str()).collect();
        assert_eq!(codes, ["T-001", "T-004", "T-003", "T-002"]);

        let sorted = sort_records(&records, TicketSort::IdleDays, SortDirection::Descending);
        assert_eq!(sorted[0].code, "T-002");
    }

    #[test]
    fn composed_pipeline_searches_filters_then_sorts() {
        let records = fixture();

        let mut query = QueryState::default()
            .with_search("t-00")
            .with_sort(TicketSort::Points, SortDirection::Descending);
        query.filters.set_equals(TicketFilter::State, "open");

        let view = run_query(&records, &query);
        let codes: Vec<_> = view.iter().map(|t| t.code.as_str()).collect();
        assert_eq!(codes, ["T-002", "T-003", "T-004"]);
    }
}
