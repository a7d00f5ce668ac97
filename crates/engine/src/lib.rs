//! `stockcast-engine` — the in-memory record query engine.
//!
//! Every dashboard list view does the same thing: take a collection of typed
//! records, narrow it with free-text search and categorical filters, order it
//! by a sort key, and derive a handful of summary metrics. This crate holds
//! that logic once, parameterized over a per-kind schema ([`Queryable`]).
//!
//! The engine is **pure**: identical query state over an identical collection
//! always yields an identical view, the input collection is never mutated,
//! and no operation performs I/O or can fail.

pub mod pipeline;
pub mod query;
pub mod schema;
pub mod summary;

pub use pipeline::{apply_filters, run_query, search, sort_records};
pub use query::{ActiveFilters, FilterValue, QueryState, SortDirection};
pub use schema::{Queryable, SortValue};
pub use summary::{mean, Summarize};
