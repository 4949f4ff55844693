//! Charging session domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a charging session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    InProgress,
    Completed,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::InProgress => "in_progress",
            SessionStatus::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "completed" => SessionStatus::Completed,
            _ => SessionStatus::InProgress,
        }
    }
}

/// A charging session at a station. `end_time` is set only on completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargingSession {
    pub id: i32,
    pub user_id: String,
    pub station_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: SessionStatus,
}

impl ChargingSession {
    pub fn start(user_id: impl Into<String>, station_id: i32) -> Self {
        Self {
            id: 0,
            user_id: user_id.into(),
            station_id,
            start_time: Utc::now(),
            end_time: None,
            status: SessionStatus::InProgress,
        }
    }

    /// Mark the session completed at the given instant
    pub fn complete(&mut self, at: DateTime<Utc>) {
        self.end_time = Some(at);
        self.status = SessionStatus::Completed;
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == SessionStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_session() {
        let session = ChargingSession::start("user-1", 7);
        assert!(session.is_in_progress());
        assert!(session.end_time.is_none());
        assert_eq!(session.station_id, 7);
    }

    #[test]
    fn test_complete_sets_end_time() {
        let mut session = ChargingSession::start("user-1", 7);
        let at = Utc::now();
        session.complete(at);
        assert_eq!(session.status, SessionStatus::Completed);
        assert_eq!(session.end_time, Some(at));
    }
}
