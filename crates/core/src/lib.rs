//! `stockcast-core` — foundation building blocks for the dashboard domain.
//!
//! This crate contains **pure domain** primitives (identifiers, the shared
//! error model). No query logic, no I/O.

pub mod error;
pub mod id;

pub use error::{CoreError, CoreResult};
pub use id::RecordId;
