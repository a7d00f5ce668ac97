use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stockcast_engine::{
    run_query, ActiveFilters, QueryState, Queryable, SortDirection, SortValue,
};

#[derive(Debug, Clone)]
struct Row {
    code: String,
    name: String,
    status: &'static str,
    rank: i64,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
enum RowFilter {
    Status,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
enum RowSort {
    #[default]
    Name,
    Rank,
}

impl Queryable for Row {
    type FilterField = RowFilter;
    type SortKey = RowSort;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.code]
    }

    fn filter_value(&self, _field: RowFilter) -> &str {
        self.status
    }

    fn sort_value(&self, key: RowSort) -> SortValue<'_> {
        match key {
            RowSort::Name => SortValue::Text(&self.name),
            RowSort::Rank => SortValue::Int(self.rank),
        }
    }
}

fn seed(count: usize) -> Vec<Row> {
    let statuses = ["active", "idle", "retired"];
    (0..count)
        .map(|i| Row {
            code: format!("RW-{i:04}"),
            name: format!("record {}", (i * 37) % count.max(1)),
            status: statuses[i % statuses.len()],
            rank: ((i * 7919) % 1000) as i64,
        })
        .collect()
}

fn bench_run_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_pipeline");

    for count in [100usize, 1_000, 10_000] {
        let rows = seed(count);

        let mut filters = ActiveFilters::new();
        filters.set_equals(RowFilter::Status, "active");
        let query = QueryState {
            search: "record 1".to_string(),
            filters,
            sort: RowSort::Rank,
            direction: SortDirection::Descending,
        };

        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(BenchmarkId::new("search_filter_sort", count), |b| {
            b.iter(|| run_query(black_box(&rows), black_box(&query)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_run_query);
criterion_main!(benches);
