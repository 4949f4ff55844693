//! Charging session repository interface

use async_trait::async_trait;

use super::model::ChargingSession;
use crate::domain::DomainResult;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Insert a session and return it with its assigned id
    async fn save(&self, session: ChargingSession) -> DomainResult<ChargingSession>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ChargingSession>>;
    async fn find_by_user(&self, user_id: &str) -> DomainResult<Vec<ChargingSession>>;
    async fn update(&self, session: ChargingSession) -> DomainResult<()>;
}
