//! Snapshot storage: vehicle working-day rows and adjustment-snapshot
//! versions.

mod model;
mod repository;

pub use model::{AdjustmentSnapshotDB, VehiclePeriodSnapshotDB};
pub use repository::SnapshotRepository;

pub use fleetbooks_core::snapshots::SnapshotRepositoryTrait;
