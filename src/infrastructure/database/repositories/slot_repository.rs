//! SeaORM implementation of SlotRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::slot::{Slot, SlotRepository, SlotStatus};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::slot;

pub struct SeaOrmSlotRepository {
    db: DatabaseConnection,
}

impl SeaOrmSlotRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: slot::Model) -> Slot {
    Slot {
        id: m.id,
        station_id: m.station_id,
        start_time: m.start_time,
        end_time: m.end_time,
        status: SlotStatus::from_str(&m.status),
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

#[async_trait]
impl SlotRepository for SeaOrmSlotRepository {
    async fn save(&self, s: Slot) -> DomainResult<Slot> {
        debug!("Saving slot for station {}", s.station_id);
        let model = slot::ActiveModel {
            id: NotSet,
            station_id: Set(s.station_id),
            start_time: Set(s.start_time),
            end_time: Set(s.end_time),
            status: Set(s.status.as_str().to_string()),
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Slot>> {
        let model = slot::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_station(&self, station_id: i32) -> DomainResult<Vec<Slot>> {
        let models = slot::Entity::find()
            .filter(slot::Column::StationId.eq(station_id))
            .order_by_asc(slot::Column::StartTime)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn update(&self, s: Slot) -> DomainResult<()> {
        debug!("Updating slot: {}", s.id);
        let existing = slot::Entity::find_by_id(s.id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("Slot", s.id))?;

        let mut active: slot::ActiveModel = existing.into();
        active.start_time = Set(s.start_time);
        active.end_time = Set(s.end_time);
        active.status = Set(s.status.as_str().to_string());
        active.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<bool> {
        debug!("Deleting slot: {}", id);
        let result = slot::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}
