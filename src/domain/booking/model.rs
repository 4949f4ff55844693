//! Slot booking domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A paid reservation of a slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i32,
    pub user_id: String,
    pub slot_id: i32,
    pub booking_time: DateTime<Utc>,
    pub amount: f64,
}

impl Booking {
    /// Create a booking for a paid amount. Returns None for non-positive amounts.
    pub fn new(user_id: impl Into<String>, slot_id: i32, amount: f64) -> Option<Self> {
        if amount <= 0.0 {
            return None;
        }
        Some(Self {
            id: 0,
            user_id: user_id.into(),
            slot_id,
            booking_time: Utc::now(),
            amount,
        })
    }
}
