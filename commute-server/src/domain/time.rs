//! Time slot type.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;

/// Error returned when parsing an invalid time slot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time slot: {reason}")]
pub struct InvalidTimeSlot {
    reason: &'static str,
}

impl InvalidTimeSlot {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// An hour window of the day such as `08:00-09:00`.
///
/// # Examples
///
/// ```
/// use commute_server::domain::TimeSlot;
///
/// let slot: TimeSlot = "08:00-09:00".parse().unwrap();
/// assert_eq!(slot.to_string(), "08:00-09:00");
///
/// assert!("09:00-08:00".parse::<TimeSlot>().is_err());
/// assert!("8-9".parse::<TimeSlot>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeSlot {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeSlot {
    /// Create a slot, rejecting windows that do not move forward.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, InvalidTimeSlot> {
        if end <= start {
            return Err(InvalidTimeSlot::new("end must be after start"));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }
}

fn parse_hhmm(s: &str) -> Result<NaiveTime, InvalidTimeSlot> {
    if s.len() != 5 {
        return Err(InvalidTimeSlot::new("expected HH:MM-HH:MM format"));
    }
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| InvalidTimeSlot::new("invalid HH:MM time"))
}

impl FromStr for TimeSlot {
    type Err = InvalidTimeSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| InvalidTimeSlot::new("expected HH:MM-HH:MM format"))?;
        Self::new(parse_hhmm(start)?, parse_hhmm(end)?)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}
