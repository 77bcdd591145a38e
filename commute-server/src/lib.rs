//! Commute route finder and scorer.
//!
//! Finds direct and one-transfer train routes from a station to the
//! stations nearest a school, scores them for commute-friendliness and
//! serves comparisons over HTTP.

pub mod compare;
pub mod config;
pub mod domain;
pub mod planner;
pub mod store;
pub mod web;
