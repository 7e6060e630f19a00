//! Trip record storage.

mod model;
mod repository;

pub use model::TripRecordDB;
pub use repository::TripRecordRepository;

pub use fleetbooks_core::trips::TripRecordSourceTrait;
