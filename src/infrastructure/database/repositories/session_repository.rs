//! SeaORM implementation of SessionRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::session::{ChargingSession, SessionRepository, SessionStatus};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::charging_session;

pub struct SeaOrmSessionRepository {
    db: DatabaseConnection,
}

impl SeaOrmSessionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: charging_session::Model) -> ChargingSession {
    ChargingSession {
        id: m.id,
        user_id: m.user_id,
        station_id: m.station_id,
        start_time: m.start_time,
        end_time: m.end_time,
        status: SessionStatus::from_str(&m.status),
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

#[async_trait]
impl SessionRepository for SeaOrmSessionRepository {
    async fn save(&self, s: ChargingSession) -> DomainResult<ChargingSession> {
        debug!("Saving session for station {}", s.station_id);
        let model = charging_session::ActiveModel {
            id: NotSet,
            user_id: Set(s.user_id),
            station_id: Set(s.station_id),
            start_time: Set(s.start_time),
            end_time: Set(s.end_time),
            status: Set(s.status.as_str().to_string()),
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ChargingSession>> {
        let model = charging_session::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_user(&self, user_id: &str) -> DomainResult<Vec<ChargingSession>> {
        let models = charging_session::Entity::find()
            .filter(charging_session::Column::UserId.eq(user_id))
            .order_by_desc(charging_session::Column::StartTime)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn update(&self, s: ChargingSession) -> DomainResult<()> {
        debug!("Updating session: {}", s.id);
        let existing = charging_session::Entity::find_by_id(s.id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("Session", s.id))?;

        let mut active: charging_session::ActiveModel = existing.into();
        active.end_time = Set(s.end_time);
        active.status = Set(s.status.as_str().to_string());
        active.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
