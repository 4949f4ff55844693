//! Charging station domain model

use serde::{Deserialize, Serialize};

/// Occupancy status of a station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StationStatus {
    Available,
    Occupied,
}

impl StationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StationStatus::Available => "available",
            StationStatus::Occupied => "occupied",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "occupied" => StationStatus::Occupied,
            _ => StationStatus::Available,
        }
    }
}

/// A charging station operated by an energy provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargingStation {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub capacity: i32,
    pub status: StationStatus,
    pub station_type: Option<String>,
    pub pricing: Option<String>,
    pub speed: Option<String>,
}

impl ChargingStation {
    pub fn new(name: impl Into<String>, location: impl Into<String>, capacity: i32) -> Self {
        Self {
            id: 0,
            name: name.into(),
            location: location.into(),
            capacity,
            status: StationStatus::Available,
            station_type: None,
            pricing: None,
            speed: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == StationStatus::Available
    }

    /// Mark the station occupied by a charging session
    pub fn occupy(&mut self) {
        self.status = StationStatus::Occupied;
    }

    /// Return the station to the available pool
    pub fn release(&mut self) {
        self.status = StationStatus::Available;
    }
}
