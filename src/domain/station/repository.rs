//! Station repository interface

use async_trait::async_trait;

use super::model::{ChargingStation, StationStatus};
use crate::domain::DomainResult;

/// Optional equality filters for station queries
#[derive(Debug, Clone, Default)]
pub struct StationFilter {
    pub pricing: Option<String>,
    pub speed: Option<String>,
    pub status: Option<StationStatus>,
}

#[async_trait]
pub trait StationRepository: Send + Sync {
    /// Insert a station and return it with its assigned id
    async fn save(&self, station: ChargingStation) -> DomainResult<ChargingStation>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ChargingStation>>;
    async fn find_all(&self) -> DomainResult<Vec<ChargingStation>>;
    async fn find_filtered(&self, filter: StationFilter) -> DomainResult<Vec<ChargingStation>>;
    async fn update(&self, station: ChargingStation) -> DomainResult<()>;
}
