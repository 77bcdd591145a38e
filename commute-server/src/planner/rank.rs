//! Route search and ranking.
//!
//! Ties the pipeline together: enumerate candidate paths, complete and
//! score each one, then keep the best few.

use tracing::{debug, warn};

use crate::domain::{CompleteRoute, RouteOptions, StationId};
use crate::store::ConnectionStore;

use super::complete::complete_route;
use super::config::PlannerConfig;
use super::enumerate::{PathEnumerator, RawPath};
use super::error::RouteError;
use super::score::advanced_commute_score;

/// Detailed outcome of a route search.
#[derive(Debug, Clone)]
pub struct RouteSearch {
    /// Scored routes, best first, at most `max_results`.
    pub routes: Vec<CompleteRoute>,

    /// Candidate paths considered after filtering.
    pub candidates: usize,

    /// Candidates dropped because they could not be completed.
    pub dropped: usize,
}

/// Sort routes by score, best first, and keep at most `max` of them.
///
/// The sort is stable: equal scores keep their incoming order.
pub fn rank_routes(mut routes: Vec<CompleteRoute>, max: usize) -> Vec<CompleteRoute> {
    routes.sort_by(|a, b| b.commute_score.cmp(&a.commute_score));
    routes.truncate(max);
    routes
}

/// Finds and ranks commute routes over a connection store.
pub struct RouteFinder<S> {
    store: S,
    config: PlannerConfig,
}

impl<S: ConnectionStore + Sync> RouteFinder<S> {
    /// Create a new route finder.
    pub fn new(store: S, config: PlannerConfig) -> Self {
        Self { store, config }
    }

    /// The underlying connection store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The planner configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Search for routes from `from` to `to`, then walk `walking_time`
    /// minutes to the destination.
    ///
    /// # Errors
    ///
    /// - `StoreUnavailable` if the direct or first-leg query fails
    /// - `NoPathFound` if no candidate path exists
    /// - `PartialFailure` if every candidate failed completion
    pub async fn search(
        &self,
        from: &StationId,
        to: &StationId,
        walking_time: u32,
        options: &RouteOptions,
    ) -> Result<RouteSearch, RouteError> {
        let enumeration = PathEnumerator::new(&self.store).enumerate(from, to).await?;

        let candidates: Vec<RawPath> = enumeration
            .paths
            .into_iter()
            .filter(|path| !self.is_excluded(path))
            .collect();

        if candidates.is_empty() {
            return Err(RouteError::NoPathFound {
                from: from.clone(),
                to: to.clone(),
            });
        }

        let total = candidates.len();
        let mut dropped = 0;
        let mut routes = Vec::with_capacity(total);

        for path in candidates {
            match complete_route(
                path,
                walking_time,
                options.time_of_day,
                self.config.transfer_mins,
            ) {
                Ok(mut route) => {
                    route.commute_score = advanced_commute_score(&route, options);
                    routes.push(route);
                }
                Err(e) => {
                    warn!(%from, %to, error = %e, "Dropping candidate route");
                    dropped += 1;
                }
            }
        }

        if routes.is_empty() {
            return Err(RouteError::PartialFailure { dropped, total });
        }

        let routes = rank_routes(routes, self.config.max_results);

        debug!(
            %from,
            %to,
            candidates = total,
            dropped,
            returned = routes.len(),
            best_score = routes.first().map(|r| r.commute_score),
            "Route search complete"
        );

        Ok(RouteSearch {
            routes,
            candidates: total,
            dropped,
        })
    }

    /// Best routes from `from` to `to`, or an empty list.
    ///
    /// Uses default options when `options` is `None`. Never fails: every
    /// search error is logged and yields no routes.
    pub async fn find_routes(
        &self,
        from: &StationId,
        to: &StationId,
        walking_time: u32,
        options: Option<&RouteOptions>,
    ) -> Vec<CompleteRoute> {
        let defaults;
        let options = match options {
            Some(options) => options,
            None => {
                defaults = RouteOptions::default();
                &defaults
            }
        };

        match self.search(from, to, walking_time, options).await {
            Ok(search) => search.routes,
            Err(e @ RouteError::NoPathFound { .. }) => {
                debug!(error = %e, "No routes");
                Vec::new()
            }
            Err(e) => {
                warn!(%from, %to, error = %e, "Route search failed");
                Vec::new()
            }
        }
    }

    /// Zero-time single-segment paths are same-station line joins.
    fn is_excluded(&self, path: &RawPath) -> bool {
        self.config.exclude_zero_time_routes
            && matches!(path.as_slice(), [only] if only.travel_time == 0)
    }
}
