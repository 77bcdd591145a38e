//! Commute route planner.
//!
//! Finds direct and one-transfer routes between two stations and ranks
//! them by commute score:
//!
//! 1. `enumerate` lists candidate segment paths from the connection store
//! 2. `complete` computes time, fare and waiting aggregates
//! 3. `score` rates each route from 0 to 100
//! 4. `rank` keeps the best few

mod complete;
mod config;
mod enumerate;
mod error;
mod rank;
mod score;


pub use complete::complete_route;
pub use config::PlannerConfig;
pub use enumerate::{Enumeration, PathEnumerator, RawPath};
pub use error::RouteError;
pub use rank::{RouteFinder, RouteSearch, rank_routes};
pub use score::{advanced_commute_score, quick_commute_score};
