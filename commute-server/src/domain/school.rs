//! Schools and the stations nearest to them.

use std::sync::Arc;

use super::{SchoolId, Station};

/// A station near a school, with the walk from the station to the gate.
#[derive(Debug, Clone, PartialEq)]
pub struct SchoolStation {
    pub station: Arc<Station>,
    /// Minutes.
    pub walking_time: u32,
    /// Kilometres.
    pub distance: f64,
    pub is_primary: bool,
}

/// A school destination.
#[derive(Debug, Clone, PartialEq)]
pub struct School {
    pub id: SchoolId,
    pub name: String,
    pub prefecture: String,
    pub address: String,
    pub stations: Vec<SchoolStation>,
}

impl School {
    /// Nearest stations with primary stations first, otherwise in data order.
    pub fn stations_primary_first(&self) -> Vec<&SchoolStation> {
        let mut stations: Vec<&SchoolStation> = self.stations.iter().collect();
        stations.sort_by_key(|s| !s.is_primary);
        stations
    }
}
