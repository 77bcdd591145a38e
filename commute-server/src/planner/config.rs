//! Configuration for the route planner.

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Maximum number of routes returned per station pair.
    pub max_results: usize,

    /// Minutes added to the total time for each change of line.
    pub transfer_mins: u32,

    /// Drop single-segment candidates with zero travel time.
    ///
    /// Such candidates come from same-station line joins and would
    /// otherwise score as near-perfect routes.
    pub exclude_zero_time_routes: bool,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_results: usize, transfer_mins: u32, exclude_zero_time_routes: bool) -> Self {
        Self {
            max_results,
            transfer_mins,
            exclude_zero_time_routes,
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_results: 3,
            transfer_mins: 3,
            exclude_zero_time_routes: true,
        }
    }
}
