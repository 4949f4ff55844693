//! Charging slot domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Occupancy status of a bookable slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotStatus {
    Available,
    Occupied,
}

impl SlotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotStatus::Available => "available",
            SlotStatus::Occupied => "occupied",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "occupied" => SlotStatus::Occupied,
            _ => SlotStatus::Available,
        }
    }
}

/// A bookable time window at a station
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: i32,
    pub station_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: SlotStatus,
}

impl Slot {
    /// Create a new slot. Returns None when the window is inverted or empty.
    pub fn new(
        station_id: i32,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Option<Self> {
        if start_time >= end_time {
            return None;
        }
        Some(Self {
            id: 0,
            station_id,
            start_time,
            end_time,
            status: SlotStatus::Available,
        })
    }

    pub fn is_available(&self) -> bool {
        self.status == SlotStatus::Available
    }

    pub fn occupy(&mut self) {
        self.status = SlotStatus::Occupied;
    }
}
