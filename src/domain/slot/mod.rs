pub mod model;
pub mod repository;

pub use model::{Slot, SlotStatus};
pub use repository::SlotRepository;
