//! Fleetbooks Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the vehicle performance and
//! rent-reconciliation engine. It is database-agnostic and defines traits
//! that are implemented by the `storage-sqlite` crate or supplied by
//! external collaborators (trip ingestion, transaction-history ledger).

pub mod adjustments;
pub mod aggregation;
pub mod constants;
pub mod errors;
pub mod performance;
pub mod periods;
pub mod slabs;
pub mod snapshots;
pub mod transactions;
pub mod trips;

// Re-export common types from the report and snapshot modules
pub use performance::*;
pub use snapshots::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
