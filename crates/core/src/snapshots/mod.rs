//! Persisted per-vehicle working-day multipliers and the period-level
//! adjustment snapshot, with last-timestamp-wins conflict resolution.

mod snapshot_model;
mod snapshot_service;
mod snapshot_traits;

pub use snapshot_model::*;
pub use snapshot_service::*;
pub use snapshot_traits::*;
