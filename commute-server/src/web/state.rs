//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::{PlannerConfig, RouteFinder};
use crate::store::{CacheConfig, CachedConnectionStore, InMemoryConnectionStore};

/// The store route searches run against.
pub type AppStore = CachedConnectionStore<Arc<InMemoryConnectionStore>>;

/// Shared application state.
///
/// The network is shared between the route finder (behind the query
/// cache) and the handlers that list stations and schools.
#[derive(Clone)]
pub struct AppState {
    /// Station, line and school reference data
    pub network: Arc<InMemoryConnectionStore>,

    /// Route finder over the cached network
    pub finder: Arc<RouteFinder<AppStore>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        network: InMemoryConnectionStore,
        cache_config: &CacheConfig,
        planner_config: PlannerConfig,
    ) -> Self {
        let network = Arc::new(network);
        let store = CachedConnectionStore::new(network.clone(), cache_config);
        Self {
            network,
            finder: Arc::new(RouteFinder::new(store, planner_config)),
        }
    }
}
