//! Slot repository interface

use async_trait::async_trait;

use super::model::Slot;
use crate::domain::DomainResult;

#[async_trait]
pub trait SlotRepository: Send + Sync {
    /// Insert a slot and return it with its assigned id
    async fn save(&self, slot: Slot) -> DomainResult<Slot>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Slot>>;
    async fn find_by_station(&self, station_id: i32) -> DomainResult<Vec<Slot>>;
    async fn update(&self, slot: Slot) -> DomainResult<()>;
    /// Delete a slot. Returns false when no such slot existed.
    async fn delete(&self, id: i32) -> DomainResult<bool>;
}
