//! Station and line reference data.

use serde::{Deserialize, Serialize};

use super::{LineId, StationId};

/// A station in the network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    /// Region the station belongs to (e.g. "東京都").
    #[serde(default)]
    pub prefecture: String,
}

impl Station {
    pub fn new(id: StationId, name: impl Into<String>, prefecture: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            prefecture: prefecture.into(),
        }
    }
}

/// A transit line run by a single operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub id: LineId,
    pub name: String,
    pub operator: String,

    /// Weekday service frequency in trips per hour.
    pub frequency_weekday: u32,

    /// Weekend service frequency in trips per hour, if known.
    #[serde(default)]
    pub frequency_weekend: Option<u32>,
}

impl Line {
    /// Create a line with only a weekday frequency.
    pub fn new(
        id: LineId,
        name: impl Into<String>,
        operator: impl Into<String>,
        frequency_weekday: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            operator: operator.into(),
            frequency_weekday,
            frequency_weekend: None,
        }
    }

    /// Average headway in minutes, or `None` when the line has no weekday service.
    pub fn headway_mins(&self) -> Option<f64> {
        (self.frequency_weekday > 0).then(|| 60.0 / f64::from(self.frequency_weekday))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(freq: u32) -> Line {
        Line::new(LineId::parse("yamanote").unwrap(), "JR山手線", "JR東日本", freq)
    }

    #[test]
    fn headway_from_frequency() {
        assert_eq!(line(24).headway_mins(), Some(2.5));
        assert_eq!(line(12).headway_mins(), Some(5.0));
    }

    #[test]
    fn no_headway_without_service() {
        assert_eq!(line(0).headway_mins(), None);
    }

    #[test]
    fn weekend_frequency_defaults_to_none() {
        let json = r#"{"id":"ginza","name":"銀座線","operator":"東京メトロ","frequency_weekday":20}"#;
        let line: Line = serde_json::from_str(json).unwrap();
        assert_eq!(line.frequency_weekday, 20);
        assert_eq!(line.frequency_weekend, None);
    }

    #[test]
    fn station_prefecture_defaults_to_empty() {
        let station: Station = serde_json::from_str(r#"{"id":"ueno","name":"上野駅"}"#).unwrap();
        assert_eq!(station.name, "上野駅");
        assert!(station.prefecture.is_empty());
    }
}
