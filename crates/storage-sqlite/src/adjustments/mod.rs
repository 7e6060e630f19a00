//! Manual per-vehicle adjustment storage.

mod model;
mod repository;

pub use model::ManualAdjustmentDB;
pub use repository::ManualAdjustmentRepository;

pub use fleetbooks_core::adjustments::ManualAdjustmentRepositoryTrait;
