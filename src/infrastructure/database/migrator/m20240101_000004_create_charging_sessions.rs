//! Create charging_sessions table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users::Users;
use super::m20240101_000002_create_stations::ChargingStations;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChargingSessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ChargingSessions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ChargingSessions::UserId).string().not_null())
                    .col(
                        ColumnDef::new(ChargingSessions::StationId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChargingSessions::StartTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ChargingSessions::EndTime).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(ChargingSessions::Status)
                            .string_len(50)
                            .not_null()
                            .default("in_progress"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sessions_user")
                            .from(ChargingSessions::Table, ChargingSessions::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sessions_station")
                            .from(ChargingSessions::Table, ChargingSessions::StationId)
                            .to(ChargingStations::Table, ChargingStations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sessions_user")
                    .table(ChargingSessions::Table)
                    .col(ChargingSessions::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChargingSessions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ChargingSessions {
    Table,
    Id,
    UserId,
    StationId,
    StartTime,
    EndTime,
    Status,
}
