//! Charging session lifecycle business logic

use std::sync::Arc;

use chrono::Utc;
use log::info;

use crate::domain::{ChargingSession, DomainError, DomainResult, RepositoryProvider};

/// Service for starting and ending charging sessions
pub struct SessionService {
    repos: Arc<dyn RepositoryProvider>,
}

impl SessionService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Start a session at a station. The station must exist and be
    /// available; it is marked occupied for the session's duration.
    pub async fn start_session(
        &self,
        user_id: &str,
        station_id: i32,
    ) -> DomainResult<ChargingSession> {
        let station = self.repos.stations().find_by_id(station_id).await?;

        let mut station = match station {
            Some(s) if s.is_available() => s,
            _ => {
                return Err(DomainError::Validation(
                    "Station not available!".to_string(),
                ))
            }
        };

        station.occupy();
        self.repos.stations().update(station).await?;

        let session = self
            .repos
            .sessions()
            .save(ChargingSession::start(user_id, station_id))
            .await?;
        info!(
            "Session {} started at station {} by user {}",
            session.id, station_id, user_id
        );
        Ok(session)
    }

    /// Complete a session and return its station to the available pool.
    pub async fn end_session(&self, session_id: i32) -> DomainResult<ChargingSession> {
        let mut session = self
            .repos
            .sessions()
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Session", session_id))?;

        session.complete(Utc::now());
        self.repos.sessions().update(session.clone()).await?;

        if let Some(mut station) = self.repos.stations().find_by_id(session.station_id).await? {
            station.release();
            self.repos.stations().update(station).await?;
        }

        info!("Session {} ended", session_id);
        Ok(session)
    }
}
