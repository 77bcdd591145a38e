//! Path enumeration.
//!
//! Produces every raw path with zero or one transfers between two
//! stations. A transfer must change line: a second leg on the same line
//! as the first is never emitted.

use futures::future::join_all;
use tracing::{debug, warn};

use crate::domain::{RouteSegment, StationId};
use crate::store::{ConnectionStore, StoreError};

/// A raw path: the segments of one candidate route, in travel order.
pub type RawPath = Vec<RouteSegment>;

/// Result of enumeration.
#[derive(Debug, Clone, Default)]
pub struct Enumeration {
    /// Direct paths first (store order), then one-transfer paths
    /// (first-leg order, then store order).
    pub paths: Vec<RawPath>,

    /// Second-leg queries that failed; their candidates are missing.
    pub failed_queries: usize,
}

/// Enumerates direct and one-transfer paths against a connection store.
pub struct PathEnumerator<'a, S> {
    store: &'a S,
}

impl<'a, S: ConnectionStore + Sync> PathEnumerator<'a, S> {
    /// Create a new enumerator.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// All paths from `from` to `to` with at most one transfer.
    ///
    /// Fails only if the direct or first-leg query fails. A failing
    /// second-leg query drops that first leg's candidates and is counted
    /// in `failed_queries`.
    pub async fn enumerate(
        &self,
        from: &StationId,
        to: &StationId,
    ) -> Result<Enumeration, StoreError> {
        let mut paths = self.direct_paths(from, to).await?;
        let transfers = self.one_transfer_paths(from, to).await?;

        debug!(
            %from,
            %to,
            direct = paths.len(),
            one_transfer = transfers.paths.len(),
            failed_queries = transfers.failed_queries,
            "Enumerated paths"
        );

        paths.extend(transfers.paths);
        Ok(Enumeration {
            paths,
            failed_queries: transfers.failed_queries,
        })
    }

    /// One single-segment path per connection from `from` to `to`.
    pub async fn direct_paths(
        &self,
        from: &StationId,
        to: &StationId,
    ) -> Result<Vec<RawPath>, StoreError> {
        let connections = self.store.connections_between(from, to).await?;

        Ok(connections
            .iter()
            .map(|conn| vec![RouteSegment::from_connection(conn)])
            .collect())
    }

    /// Two-segment paths changing line at an intermediate station.
    pub async fn one_transfer_paths(
        &self,
        from: &StationId,
        to: &StationId,
    ) -> Result<Enumeration, StoreError> {
        let first_legs = self.store.connections_from(from).await?;

        let second_leg_queries: Vec<_> = first_legs
            .iter()
            .map(|first| {
                self.store
                    .connections_from_excluding(first.arrival_id(), &first.line.id)
            })
            .collect();
        let second_legs = join_all(second_leg_queries).await;

        let mut result = Enumeration::default();
        for (first, seconds) in first_legs.iter().zip(second_legs) {
            let seconds = match seconds {
                Ok(seconds) => seconds,
                Err(e) => {
                    warn!(
                        station = %first.arrival_id(),
                        line = %first.line.id,
                        error = %e,
                        "Failed to fetch second legs, skipping"
                    );
                    result.failed_queries += 1;
                    continue;
                }
            };

            let first_segment = RouteSegment::from_connection(first);
            for second in seconds
                .iter()
                .filter(|second| second.arrival_id() == to && second.line.id != first.line.id)
            {
                result.paths.push(vec![
                    first_segment.clone(),
                    RouteSegment::from_connection(second),
                ]);
            }
        }

        Ok(result)
    }
}
