//! Network fixture shared by comparison and simulation tests.
//!
//! Every station is reached from `home` only by direct trains:
//!
//! | to    | line  | freq | mins |
//! |-------|-------|------|------|
//! | east  | red   | 6    | 40   |
//! | east  | blue  | 4    | 40   |
//! | west  | blue  | 4    | 40   |
//! | west  | red   | 6    | 40   |
//! | west2 | blue  | 4    | 40   |
//! | west3 | blue  | 4    | 40   |
//! | north | green | 24   | 5    |
//!
//! `far` is unreachable.

use crate::domain::{SchoolId, StationId};
use crate::planner::{PlannerConfig, RouteFinder};
use crate::store::InMemoryConnectionStore;

const NETWORK: &str = r#"{
    "stations": [
        {"id": "home", "name": "Home"},
        {"id": "east", "name": "East"},
        {"id": "west", "name": "West"},
        {"id": "west2", "name": "West 2"},
        {"id": "west3", "name": "West 3"},
        {"id": "north", "name": "North"},
        {"id": "far", "name": "Far"}
    ],
    "lines": [
        {"id": "red", "name": "Red Line", "operator": "Metro", "frequency_weekday": 6},
        {"id": "blue", "name": "Blue Line", "operator": "Metro", "frequency_weekday": 4},
        {"id": "green", "name": "Green Line", "operator": "Rail", "frequency_weekday": 24}
    ],
    "connections": [
        {"id": "he-red", "departure": "home", "arrival": "east", "line": "red", "travel_time": 40, "distance": 20.0, "fare": 200},
        {"id": "he-blue", "departure": "home", "arrival": "east", "line": "blue", "travel_time": 40, "distance": 20.0, "fare": 200},
        {"id": "hw-blue", "departure": "home", "arrival": "west", "line": "blue", "travel_time": 40, "distance": 20.0, "fare": 200},
        {"id": "hw-red", "departure": "home", "arrival": "west", "line": "red", "travel_time": 40, "distance": 20.0, "fare": 200},
        {"id": "hw2-blue", "departure": "home", "arrival": "west2", "line": "blue", "travel_time": 40, "distance": 20.0, "fare": 200},
        {"id": "hw3-blue", "departure": "home", "arrival": "west3", "line": "blue", "travel_time": 40, "distance": 20.0, "fare": 200},
        {"id": "hn-green", "departure": "home", "arrival": "north", "line": "green", "travel_time": 5, "distance": 2.0, "fare": 150}
    ],
    "schools": [
        {"id": "eastwest", "name": "East West Academy", "stations": [
            {"station": "west", "walking_time": 3},
            {"station": "east", "walking_time": 5, "is_primary": true}
        ]},
        {"id": "north", "name": "North High", "stations": [
            {"station": "north", "walking_time": 4, "is_primary": true}
        ]},
        {"id": "nowhere", "name": "Nowhere School"},
        {"id": "far", "name": "Far College", "stations": [
            {"station": "far", "walking_time": 5, "is_primary": true}
        ]},
        {"id": "twins", "name": "Twin Gates School", "stations": [
            {"station": "west2", "walking_time": 3},
            {"station": "west3", "walking_time": 3}
        ]}
    ]
}"#;

pub fn store() -> InMemoryConnectionStore {
    InMemoryConnectionStore::from_json_str(NETWORK).unwrap()
}

pub fn finder() -> RouteFinder<InMemoryConnectionStore> {
    RouteFinder::new(store(), PlannerConfig::default())
}

pub fn sid(s: &str) -> StationId {
    StationId::parse(s).unwrap()
}

pub fn school_id(s: &str) -> SchoolId {
    SchoolId::parse(s).unwrap()
}
