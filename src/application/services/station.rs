//! Station and slot management business logic

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::info;

use crate::domain::{
    ChargingStation, DomainError, DomainResult, RepositoryProvider, Slot, StationFilter,
};

/// Service for station CRUD and slot management
pub struct StationService {
    repos: Arc<dyn RepositoryProvider>,
}

impl StationService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Create a station from the owner-facing route (`name`, `location`,
    /// `capacity`).
    pub async fn create_station(
        &self,
        name: &str,
        location: &str,
        capacity: i32,
    ) -> DomainResult<ChargingStation> {
        if name.is_empty() || location.is_empty() {
            return Err(DomainError::Validation(
                "Name and location are required".to_string(),
            ));
        }
        let station = self
            .repos
            .stations()
            .save(ChargingStation::new(name, location, capacity))
            .await?;
        info!("Charging station created: {} ({})", station.name, station.id);
        Ok(station)
    }

    /// Create a station from the provider route (`station_name`,
    /// `location`, `station_type`). Capacity defaults to 1 on this path.
    pub async fn add_station(
        &self,
        name: &str,
        location: &str,
        station_type: &str,
    ) -> DomainResult<ChargingStation> {
        if name.is_empty() || location.is_empty() || station_type.is_empty() {
            return Err(DomainError::Validation(
                "Station Name, Location, and Type are required".to_string(),
            ));
        }
        let mut station = ChargingStation::new(name, location, 1);
        station.station_type = Some(station_type.to_string());
        let station = self.repos.stations().save(station).await?;
        info!("Charging station added: {} ({})", station.name, station.id);
        Ok(station)
    }

    pub async fn list_stations(&self) -> DomainResult<Vec<ChargingStation>> {
        self.repos.stations().find_all().await
    }

    pub async fn filter_stations(
        &self,
        filter: StationFilter,
    ) -> DomainResult<Vec<ChargingStation>> {
        self.repos.stations().find_filtered(filter).await
    }

    /// Add a slot under a station. The time window must be non-empty.
    pub async fn add_slot(
        &self,
        station_id: i32,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> DomainResult<Slot> {
        let slot = Slot::new(station_id, start_time, end_time).ok_or_else(|| {
            DomainError::Validation("start_time must be before end_time".to_string())
        })?;
        let slot = self.repos.slots().save(slot).await?;
        info!("Slot {} added for station {}", slot.id, station_id);
        Ok(slot)
    }

    /// Overwrite an existing slot's time window
    pub async fn edit_slot(
        &self,
        slot_id: i32,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> DomainResult<Slot> {
        if start_time >= end_time {
            return Err(DomainError::Validation(
                "start_time must be before end_time".to_string(),
            ));
        }
        let mut slot = self
            .repos
            .slots()
            .find_by_id(slot_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Slot", slot_id))?;
        slot.start_time = start_time;
        slot.end_time = end_time;
        self.repos.slots().update(slot.clone()).await?;
        info!("Slot {} updated", slot_id);
        Ok(slot)
    }

    pub async fn delete_slot(&self, slot_id: i32) -> DomainResult<()> {
        let deleted = self.repos.slots().delete(slot_id).await?;
        if !deleted {
            return Err(DomainError::not_found("Slot", slot_id));
        }
        info!("Slot {} deleted", slot_id);
        Ok(())
    }

    /// Every slot for a station. An unknown station yields an empty list,
    /// not an error.
    pub async fn slot_availability(&self, station_id: i32) -> DomainResult<Vec<Slot>> {
        self.repos.slots().find_by_station(station_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::SeaOrmRepositoryProvider;
    use chrono::TimeZone;
    use sea_orm::Database;
    use sea_orm_migration::MigratorTrait;

    async fn service() -> StationService {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        StationService::new(Arc::new(SeaOrmRepositoryProvider::new(db)))
    }

    fn window() -> (DateTime<Utc>, DateTime<Utc>) {
        (
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_create_station_defaults_available() {
        let svc = service().await;
        let station = svc.create_station("S1", "L1", 2).await.unwrap();
        assert!(station.id > 0);
        assert!(station.is_available());

        let all = svc.list_stations().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "S1");
    }

    #[tokio::test]
    async fn test_add_station_requires_all_fields() {
        let svc = service().await;
        let err = svc.add_station("", "L1", "fast").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_slot_add_edit_delete() {
        let svc = service().await;
        let station = svc.add_station("S1", "L1", "fast").await.unwrap();
        let (start, end) = window();

        let slot = svc.add_slot(station.id, start, end).await.unwrap();
        assert!(slot.is_available());

        let later = Utc.with_ymd_and_hms(2024, 1, 1, 2, 0, 0).unwrap();
        let edited = svc.edit_slot(slot.id, start, later).await.unwrap();
        assert_eq!(edited.end_time, later);

        svc.delete_slot(slot.id).await.unwrap();
        // second delete of the same id is a not-found error
        let err = svc.delete_slot(slot.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_add_slot_rejects_inverted_window() {
        let svc = service().await;
        let station = svc.add_station("S1", "L1", "fast").await.unwrap();
        let (start, end) = window();
        let err = svc.add_slot(station.id, end, start).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_edit_unknown_slot_is_not_found() {
        let svc = service().await;
        let (start, end) = window();
        let err = svc.edit_slot(999, start, end).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_slot_availability_unknown_station_is_empty() {
        let svc = service().await;
        let slots = svc.slot_availability(42).await.unwrap();
        assert!(slots.is_empty());
    }

    #[tokio::test]
    async fn test_filter_stations() {
        let svc = service().await;
        let mut a = ChargingStation::new("A", "L1", 1);
        a.pricing = Some("low".to_string());
        let mut b = ChargingStation::new("B", "L2", 1);
        b.pricing = Some("high".to_string());
        svc.repos.stations().save(a).await.unwrap();
        svc.repos.stations().save(b).await.unwrap();

        let filter = StationFilter {
            pricing: Some("low".to_string()),
            ..Default::default()
        };
        let found = svc.filter_stations(filter).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "A");
    }
}
