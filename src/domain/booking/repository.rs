//! Booking repository interface

use async_trait::async_trait;

use super::model::Booking;
use crate::domain::DomainResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Insert a booking and return it with its assigned id
    async fn save(&self, booking: Booking) -> DomainResult<Booking>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Booking>>;
    async fn find_by_user(&self, user_id: &str) -> DomainResult<Vec<Booking>>;
}
