//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::booking::BookingRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::session::SessionRepository;
use crate::domain::slot::SlotRepository;
use crate::domain::station::StationRepository;
use crate::domain::user::UserRepository;

use super::booking_repository::SeaOrmBookingRepository;
use super::session_repository::SeaOrmSessionRepository;
use super::slot_repository::SeaOrmSlotRepository;
use super::station_repository::SeaOrmStationRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let station = repos.stations().find_by_id(1).await?;
/// let slots = repos.slots().find_by_station(1).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    users: SeaOrmUserRepository,
    stations: SeaOrmStationRepository,
    slots: SeaOrmSlotRepository,
    sessions: SeaOrmSessionRepository,
    bookings: SeaOrmBookingRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: SeaOrmUserRepository::new(db.clone()),
            stations: SeaOrmStationRepository::new(db.clone()),
            slots: SeaOrmSlotRepository::new(db.clone()),
            sessions: SeaOrmSessionRepository::new(db.clone()),
            bookings: SeaOrmBookingRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn stations(&self) -> &dyn StationRepository {
        &self.stations
    }

    fn slots(&self) -> &dyn SlotRepository {
        &self.slots
    }

    fn sessions(&self) -> &dyn SessionRepository {
        &self.sessions
    }

    fn bookings(&self) -> &dyn BookingRepository {
        &self.bookings
    }
}
