//! In-memory connection store backed by a JSON network document.
//!
//! The document lists stations, lines, connections and schools, with
//! connections and school stations referring to stations and lines by id.
//! References are resolved once at load time, so a loaded store only
//! ever hands out fully populated connections.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{
    Connection, ConnectionId, Line, LineId, School, SchoolId, SchoolStation, Station, StationId,
};

use super::{ConnectionStore, StoreError};

/// A connection as stored in the network document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub id: ConnectionId,
    pub departure: StationId,
    pub arrival: StationId,
    pub line: LineId,
    pub travel_time: u32,
    pub distance: f64,
    /// Missing fares count as zero.
    #[serde(default)]
    pub fare: Option<u32>,
}

/// A school's nearest station as stored in the network document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolStationRecord {
    pub station: StationId,
    pub walking_time: u32,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub is_primary: bool,
}

/// A school as stored in the network document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolRecord {
    pub id: SchoolId,
    pub name: String,
    #[serde(default)]
    pub prefecture: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub stations: Vec<SchoolStationRecord>,
}

/// The network document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Network {
    #[serde(default)]
    pub stations: Vec<Station>,
    #[serde(default)]
    pub lines: Vec<Line>,
    #[serde(default)]
    pub connections: Vec<ConnectionRecord>,
    #[serde(default)]
    pub schools: Vec<SchoolRecord>,
}

/// Connection store holding the whole network in memory.
///
/// Query results preserve the order connections appear in the document.
#[derive(Debug, Default)]
pub struct InMemoryConnectionStore {
    stations: HashMap<StationId, Arc<Station>>,
    station_order: Vec<StationId>,
    connections: Vec<Connection>,
    /// Indices into `connections`, keyed by departure station.
    by_departure: HashMap<StationId, Vec<usize>>,
    schools: Vec<School>,
}

impl InMemoryConnectionStore {
    /// Build a store from a parsed network document.
    pub fn from_network(network: Network) -> Result<Self, StoreError> {
        let mut stations = HashMap::new();
        let mut station_order = Vec::with_capacity(network.stations.len());
        for station in network.stations {
            let id = station.id.clone();
            if stations.insert(id.clone(), Arc::new(station)).is_some() {
                return Err(duplicate("station", &id));
            }
            station_order.push(id);
        }

        let mut lines: HashMap<LineId, Arc<Line>> = HashMap::new();
        for line in network.lines {
            if line.headway_mins().is_none() {
                warn!(line = %line.id, "Line has no weekday service, routes on it will be dropped");
            }
            let id = line.id.clone();
            if lines.insert(id.clone(), Arc::new(line)).is_some() {
                return Err(duplicate("line", &id));
            }
        }

        let lookup_station = |id: &StationId| {
            stations
                .get(id)
                .cloned()
                .ok_or_else(|| StoreError::UnknownReference {
                    kind: "station",
                    id: id.to_string(),
                })
        };

        let mut connections = Vec::with_capacity(network.connections.len());
        let mut by_departure: HashMap<StationId, Vec<usize>> = HashMap::new();
        let mut connection_ids = HashSet::with_capacity(network.connections.len());
        for record in network.connections {
            if !connection_ids.insert(record.id.clone()) {
                return Err(duplicate("connection", &record.id));
            }
            let line = lines
                .get(&record.line)
                .cloned()
                .ok_or_else(|| StoreError::UnknownReference {
                    kind: "line",
                    id: record.line.to_string(),
                })?;

            let connection = Connection {
                id: record.id,
                departure: lookup_station(&record.departure)?,
                arrival: lookup_station(&record.arrival)?,
                line,
                travel_time: record.travel_time,
                distance: record.distance,
                fare: record.fare.unwrap_or(0),
            };

            by_departure
                .entry(record.departure)
                .or_default()
                .push(connections.len());
            connections.push(connection);
        }

        let mut schools = Vec::with_capacity(network.schools.len());
        let mut school_ids = HashSet::with_capacity(network.schools.len());
        for record in network.schools {
            if !school_ids.insert(record.id.clone()) {
                return Err(duplicate("school", &record.id));
            }
            let stations = record
                .stations
                .iter()
                .map(|s| {
                    Ok(SchoolStation {
                        station: lookup_station(&s.station)?,
                        walking_time: s.walking_time,
                        distance: s.distance,
                        is_primary: s.is_primary,
                    })
                })
                .collect::<Result<Vec<_>, StoreError>>()?;

            schools.push(School {
                id: record.id,
                name: record.name,
                prefecture: record.prefecture,
                address: record.address,
                stations,
            });
        }

        debug!(
            stations = station_order.len(),
            connections = connections.len(),
            line_joins = connections.iter().filter(|c| c.is_virtual()).count(),
            schools = schools.len(),
            "Loaded network"
        );

        Ok(Self {
            stations,
            station_order,
            connections,
            by_departure,
            schools,
        })
    }

    /// Parse a network document from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let network: Network =
            serde_json::from_str(json).map_err(|e| StoreError::Parse(e.to_string()))?;
        Self::from_network(network)
    }

    /// Load a network document from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| StoreError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&json)
    }

    /// Look up a station by id.
    pub fn station(&self, id: &StationId) -> Option<Arc<Station>> {
        self.stations.get(id).cloned()
    }

    /// All stations, in document order.
    pub fn stations(&self) -> Vec<Arc<Station>> {
        self.station_order
            .iter()
            .filter_map(|id| self.stations.get(id).cloned())
            .collect()
    }

    /// Look up a school by id.
    pub fn school(&self, id: &SchoolId) -> Option<&School> {
        self.schools.iter().find(|s| &s.id == id)
    }

    /// All schools, in document order.
    pub fn schools(&self) -> &[School] {
        &self.schools
    }

    /// Number of connection edges.
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    fn departing(&self, station: &StationId) -> impl Iterator<Item = &Connection> {
        self.by_departure
            .get(station)
            .into_iter()
            .flatten()
            .map(|&idx| &self.connections[idx])
    }
}

fn duplicate(kind: &'static str, id: &impl std::fmt::Display) -> StoreError {
    StoreError::DuplicateId {
        kind,
        id: id.to_string(),
    }
}

impl ConnectionStore for InMemoryConnectionStore {
    async fn connections_from(&self, station: &StationId) -> Result<Vec<Connection>, StoreError> {
        Ok(self.departing(station).cloned().collect())
    }

    async fn connections_between(
        &self,
        from: &StationId,
        to: &StationId,
    ) -> Result<Vec<Connection>, StoreError> {
        Ok(self
            .departing(from)
            .filter(|c| c.arrival_id() == to)
            .cloned()
            .collect())
    }

    async fn connections_from_excluding(
        &self,
        station: &StationId,
        exclude_line: &LineId,
    ) -> Result<Vec<Connection>, StoreError> {
        Ok(self
            .departing(station)
            .filter(|c| &c.line.id != exclude_line)
            .cloned()
            .collect())
    }
}
