//! `stockcast-datasource` — the data-access collaborator behind every
//! dashboard list view.
//!
//! Views never own their data directly: they hold an injected
//! [`RecordSource`] and a [`CollectionView`] that drives the load/refresh
//! lifecycle around the query engine. The shipped sources are seeded
//! in-memory fixtures with simulated latency; there is no real backend.

pub mod seed;
pub mod source;
pub mod view;

pub use source::{FixtureSource, RecordSource, SourceError};
pub use view::{CollectionView, LoadState, RefreshTicket};
