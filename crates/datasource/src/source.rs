//! Record sources: where a view's collection comes from.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Failure loading a collection from a source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The source could not produce a collection.
    #[error("source unavailable: {0}")]
    Unavailable(String),

    /// An embedded seed dataset failed to decode.
    #[error("malformed seed data: {0}")]
    Seed(String),
}

/// Asynchronous provider of one record kind's full collection.
///
/// A load always returns the complete dataset; views replace their
/// collection wholesale rather than patching it. Implementations are
/// opaque to the view — fixtures here, a real API elsewhere.
#[async_trait]
pub trait RecordSource<R>: Send + Sync {
    async fn load(&self) -> Result<Vec<R>, SourceError>;
}

/// In-memory source seeded with a fixed collection.
///
/// Clones the seed on every load and optionally sleeps first to simulate
/// network latency, which is all the original product's backend ever did.
#[derive(Debug, Clone)]
pub struct FixtureSource<R> {
    records: Vec<R>,
    latency: Duration,
}

impl<R> FixtureSource<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records,
            latency: Duration::ZERO,
        }
    }

    /// Simulate network latency on every load.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl<R> RecordSource<R> for FixtureSource<R>
where
    R: Clone + Send + Sync + 'static,
{
    async fn load(&self) -> Result<Vec<R>, SourceError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(self.records.clone())
    }
}
