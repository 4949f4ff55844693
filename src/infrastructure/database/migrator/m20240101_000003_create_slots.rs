//! Create slots table

use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_stations::ChargingStations;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Slots::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Slots::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Slots::StationId).integer().not_null())
                    .col(
                        ColumnDef::new(Slots::StartTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Slots::EndTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Slots::Status)
                            .string_len(50)
                            .not_null()
                            .default("available"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_slots_station")
                            .from(Slots::Table, Slots::StationId)
                            .to(ChargingStations::Table, ChargingStations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_slots_station")
                    .table(Slots::Table)
                    .col(Slots::StationId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Slots::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Slots {
    Table,
    Id,
    StationId,
    StartTime,
    EndTime,
    Status,
}
