//! Core business entities, repository traits and error types

pub mod booking;
pub mod error;
pub mod repositories;
pub mod session;
pub mod slot;
pub mod station;
pub mod user;

pub use booking::{Booking, BookingRepository};
pub use error::{DomainError, DomainResult};
pub use repositories::RepositoryProvider;
pub use session::{ChargingSession, SessionRepository, SessionStatus};
pub use slot::{Slot, SlotRepository, SlotStatus};
pub use station::{ChargingStation, StationFilter, StationRepository, StationStatus};
pub use user::{User, UserRepository, UserRole};
