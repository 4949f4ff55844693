//! Repository provider trait
//!
//! Aggregates the per-entity repository interfaces behind one injection
//! point so services depend on a single `Arc<dyn RepositoryProvider>`.

use crate::domain::booking::BookingRepository;
use crate::domain::session::SessionRepository;
use crate::domain::slot::SlotRepository;
use crate::domain::station::StationRepository;
use crate::domain::user::UserRepository;

pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepository;
    fn stations(&self) -> &dyn StationRepository;
    fn slots(&self) -> &dyn SlotRepository;
    fn sessions(&self) -> &dyn SessionRepository;
    fn bookings(&self) -> &dyn BookingRepository;
}
