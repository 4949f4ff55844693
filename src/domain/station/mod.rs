pub mod model;
pub mod repository;

pub use model::{ChargingStation, StationStatus};
pub use repository::{StationFilter, StationRepository};
