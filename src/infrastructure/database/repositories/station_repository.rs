//! SeaORM implementation of StationRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set,
};

use crate::domain::station::{ChargingStation, StationFilter, StationRepository, StationStatus};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::station;

pub struct SeaOrmStationRepository {
    db: DatabaseConnection,
}

impl SeaOrmStationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: station::Model) -> ChargingStation {
    ChargingStation {
        id: m.id,
        name: m.name,
        location: m.location,
        capacity: m.capacity,
        status: StationStatus::from_str(&m.status),
        station_type: m.station_type,
        pricing: m.pricing,
        speed: m.speed,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

#[async_trait]
impl StationRepository for SeaOrmStationRepository {
    async fn save(&self, s: ChargingStation) -> DomainResult<ChargingStation> {
        debug!("Saving station: {}", s.name);
        let model = station::ActiveModel {
            id: NotSet,
            name: Set(s.name),
            location: Set(s.location),
            capacity: Set(s.capacity),
            status: Set(s.status.as_str().to_string()),
            station_type: Set(s.station_type),
            pricing: Set(s.pricing),
            speed: Set(s.speed),
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ChargingStation>> {
        let model = station::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<ChargingStation>> {
        let models = station::Entity::find().all(&self.db).await.map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_filtered(&self, filter: StationFilter) -> DomainResult<Vec<ChargingStation>> {
        let mut query = station::Entity::find();
        if let Some(pricing) = filter.pricing {
            query = query.filter(station::Column::Pricing.eq(pricing));
        }
        if let Some(speed) = filter.speed {
            query = query.filter(station::Column::Speed.eq(speed));
        }
        if let Some(status) = filter.status {
            query = query.filter(station::Column::Status.eq(status.as_str()));
        }
        let models = query.all(&self.db).await.map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn update(&self, s: ChargingStation) -> DomainResult<()> {
        debug!("Updating station: {}", s.id);
        let existing = station::Entity::find_by_id(s.id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("Station", s.id))?;

        let mut active: station::ActiveModel = existing.into();
        active.name = Set(s.name);
        active.location = Set(s.location);
        active.capacity = Set(s.capacity);
        active.status = Set(s.status.as_str().to_string());
        active.station_type = Set(s.station_type);
        active.pricing = Set(s.pricing);
        active.speed = Set(s.speed);
        active.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
