//! Create charging_stations table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChargingStations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ChargingStations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ChargingStations::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChargingStations::Location)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChargingStations::Capacity)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(ChargingStations::Status)
                            .string_len(50)
                            .not_null()
                            .default("available"),
                    )
                    .col(ColumnDef::new(ChargingStations::StationType).string_len(50))
                    .col(ColumnDef::new(ChargingStations::Pricing).string_len(50))
                    .col(ColumnDef::new(ChargingStations::Speed).string_len(50))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChargingStations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ChargingStations {
    Table,
    Id,
    Name,
    Location,
    Capacity,
    Status,
    StationType,
    Pricing,
    Speed,
}
