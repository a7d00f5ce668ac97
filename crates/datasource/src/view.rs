//! Load/refresh lifecycle around the query engine.

use std::sync::Arc;

use stockcast_engine::{run_query, FilterValue, QueryState, Queryable, SortDirection, Summarize};

use crate::source::{RecordSource, SourceError};

/// Where a view is in its load lifecycle.
///
/// `Failed` is first-class: a rejected load or refresh is surfaced to the
/// caller and recorded here, never just swallowed into a log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Initial load outstanding; nothing to display yet.
    Loading,
    /// Collection available; the query pipeline is live.
    Loaded,
    /// A reload is outstanding; the previous collection stays displayable.
    Refreshing,
    /// The last load or refresh failed.
    Failed(String),
}

impl LoadState {
    /// A load or refresh is currently outstanding.
    pub fn is_busy(&self) -> bool {
        matches!(self, LoadState::Loading | LoadState::Refreshing)
    }
}

/// Epoch token pairing a `begin_refresh` with its `complete_refresh`.
///
/// Only the ticket from the most recent `begin_refresh` can install a
/// result; completing with an older ticket is a logged no-op. This gives
/// overlapping refreshes a defined last-write-wins outcome instead of
/// whichever-resolves-last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    epoch: u64,
}

/// One dashboard list view's state: collection, query state, summary.
///
/// The collection is immutable per load cycle — a refresh replaces it
/// wholesale. The summary is recomputed only when a load or refresh
/// completes, never on query-state changes.
pub struct CollectionView<R: Queryable + Summarize> {
    source: Arc<dyn RecordSource<R>>,
    state: LoadState,
    records: Vec<R>,
    summary: Option<R::Summary>,
    query: QueryState<R::FilterField, R::SortKey>,
    epoch: u64,
}

impl<R: Queryable + Summarize> CollectionView<R> {
    /// Create a view over an injected source. The view starts in
    /// [`LoadState::Loading`] with default query state; call
    /// [`Self::load`] to populate it.
    pub fn new(source: Arc<dyn RecordSource<R>>) -> Self {
        Self {
            source,
            state: LoadState::Loading,
            records: Vec::new(),
            summary: None,
            query: QueryState::default(),
            epoch: 0,
        }
    }

    /// Initial load. On failure the view moves to [`LoadState::Failed`]
    /// and the error is returned to the caller.
    pub async fn load(&mut self) -> Result<(), SourceError> {
        self.state = LoadState::Loading;
        match self.source.load().await {
            Ok(records) => {
                tracing::debug!(count = records.len(), "collection loaded");
                self.install(records);
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "collection load failed");
                self.state = LoadState::Failed(err.to_string());
                Err(err)
            }
        }
    }

    /// Start a refresh cycle and claim its epoch ticket.
    ///
    /// The previous collection stays displayable while the refresh is
    /// outstanding.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.epoch += 1;
        self.state = LoadState::Refreshing;
        RefreshTicket { epoch: self.epoch }
    }

    /// Finish a refresh cycle.
    ///
    /// Returns `Ok(true)` if the result was installed, `Ok(false)` if the
    /// ticket was superseded by a newer refresh (the result is discarded),
    /// and the source error if the current refresh failed. A failed
    /// refresh keeps the stale collection but reports
    /// [`LoadState::Failed`].
    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<R>, SourceError>,
    ) -> Result<bool, SourceError> {
        if ticket.epoch != self.epoch {
            tracing::warn!(
                stale_epoch = ticket.epoch,
                current_epoch = self.epoch,
                "discarding superseded refresh result"
            );
            return Ok(false);
        }

        match result {
            Ok(records) => {
                tracing::debug!(count = records.len(), "collection refreshed");
                self.install(records);
                Ok(true)
            }
            Err(err) => {
                tracing::error!(error = %err, "collection refresh failed");
                self.state = LoadState::Failed(err.to_string());
                Err(err)
            }
        }
    }

    /// Convenience wrapper running both refresh phases back to back.
    pub async fn refresh(&mut self) -> Result<(), SourceError> {
        let ticket = self.begin_refresh();
        let result = self.source.load().await;
        self.complete_refresh(ticket, result).map(|_| ())
    }

    fn install(&mut self, records: Vec<R>) {
        self.summary = Some(R::summarize(&records));
        self.records = records;
        self.state = LoadState::Loaded;
    }

    /// The filtered, sorted view the presentation layer renders.
    ///
    /// Runs the composed pipeline over the current collection; empty while
    /// no collection has been installed yet.
    pub fn view(&self) -> Vec<R> {
        run_query(&self.records, &self.query)
    }

    /// Summary metrics over the full (unfiltered) collection.
    pub fn summary(&self) -> Option<&R::Summary> {
        self.summary.as_ref()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// The source-of-truth collection in load order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn query(&self) -> &QueryState<R::FilterField, R::SortKey> {
        &self.query
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.query.search = text.into();
    }

    pub fn set_filter(&mut self, field: R::FilterField, value: FilterValue) {
        self.query.filters.set(field, value);
    }

    pub fn clear_filter(&mut self, field: R::FilterField) {
        self.query.filters.clear(field);
    }

    pub fn set_sort(&mut self, key: R::SortKey, direction: SortDirection) {
        self.query.sort = key;
        self.query.direction = direction;
    }
}
