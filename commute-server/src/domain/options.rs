//! Route search options.

use serde::{Deserialize, Serialize};

/// Which aspect of a commute the caller cares about most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Time,
    Cost,
    Transfers,
    /// Balanced scoring with no extra adjustment.
    #[default]
    Comfort,
}

/// Part of the day the commute happens in. Only biases waiting-time math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    #[default]
    Morning,
    Evening,
    Daytime,
}

/// Calendar type of the travel day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    #[default]
    Weekday,
    Weekend,
    Holiday,
}

/// The time slot assumed when none is given.
pub const DEFAULT_TIME_SLOT: &str = "08:00-09:00";

/// Options for one route search.
///
/// `max_transfers`, `time_slot` and `day_type` are carried for the caller's
/// context; the enumerator only ever builds routes with zero or one transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteOptions {
    pub prioritize: Priority,
    pub time_of_day: TimeOfDay,
    pub max_transfers: u32,
    pub time_slot: Option<String>,
    pub day_type: Option<DayType>,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            prioritize: Priority::Comfort,
            time_of_day: TimeOfDay::Morning,
            max_transfers: 2,
            time_slot: Some(DEFAULT_TIME_SLOT.to_string()),
            day_type: Some(DayType::Weekday),
        }
    }
}

impl RouteOptions {
    /// Set the scoring priority.
    pub fn with_priority(mut self, prioritize: Priority) -> Self {
        self.prioritize = prioritize;
        self
    }

    /// Set the time of day.
    pub fn with_time_of_day(mut self, time_of_day: TimeOfDay) -> Self {
        self.time_of_day = time_of_day;
        self
    }
}
