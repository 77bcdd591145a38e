//! Connection store: read access to the transit graph.
//!
//! The planner never talks to a database directly. It is handed a
//! `ConnectionStore`, which lets tests drive it with fixed fixture graphs
//! and lets the server wrap the real store in a cache.

mod cache;
mod error;
mod memory;

use std::future::Future;
use std::sync::Arc;

use crate::domain::{Connection, LineId, StationId};

pub use cache::{CacheConfig, CachedConnectionStore};
pub use error::StoreError;
pub use memory::{
    ConnectionRecord, InMemoryConnectionStore, Network, SchoolRecord, SchoolStationRecord,
};

/// Read-only queries over connection edges.
///
/// Every method resolves the station and line of each returned connection.
pub trait ConnectionStore {
    /// All connections departing `station`.
    fn connections_from(
        &self,
        station: &StationId,
    ) -> impl Future<Output = Result<Vec<Connection>, StoreError>> + Send;

    /// Direct connections from `from` to `to`.
    fn connections_between(
        &self,
        from: &StationId,
        to: &StationId,
    ) -> impl Future<Output = Result<Vec<Connection>, StoreError>> + Send;

    /// Connections departing `station` on any line except `exclude_line`.
    fn connections_from_excluding(
        &self,
        station: &StationId,
        exclude_line: &LineId,
    ) -> impl Future<Output = Result<Vec<Connection>, StoreError>> + Send;
}

impl<S: ConnectionStore + Send + Sync> ConnectionStore for Arc<S> {
    fn connections_from(
        &self,
        station: &StationId,
    ) -> impl Future<Output = Result<Vec<Connection>, StoreError>> + Send {
        (**self).connections_from(station)
    }

    fn connections_between(
        &self,
        from: &StationId,
        to: &StationId,
    ) -> impl Future<Output = Result<Vec<Connection>, StoreError>> + Send {
        (**self).connections_between(from, to)
    }

    fn connections_from_excluding(
        &self,
        station: &StationId,
        exclude_line: &LineId,
    ) -> impl Future<Output = Result<Vec<Connection>, StoreError>> + Send {
        (**self).connections_from_excluding(station, exclude_line)
    }
}
