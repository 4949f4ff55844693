//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users;
mod m20240101_000002_create_stations;
mod m20240101_000003_create_slots;
mod m20240101_000004_create_charging_sessions;
mod m20240101_000005_create_bookings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users::Migration),
            Box::new(m20240101_000002_create_stations::Migration),
            Box::new(m20240101_000003_create_slots::Migration),
            Box::new(m20240101_000004_create_charging_sessions::Migration),
            Box::new(m20240101_000005_create_bookings::Migration),
        ]
    }
}
