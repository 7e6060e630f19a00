//! SQLite storage implementation for fleetbooks.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository and source traits defined in
//! `fleetbooks-core` and contains:
//! - Database connection pooling and management
//! - Embedded Diesel migrations
//! - Repository implementations for trip records, snapshots, manual
//!   adjustments, and slab configuration
//! - Database-specific row models (with Diesel derives)
//!
//! This crate is the only place in the workspace where Diesel dependencies
//! exist. `core` is database-agnostic and works with traits.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod adjustments;
pub mod slabs;
pub mod snapshots;
pub mod trips;

// Re-export database utilities
pub use db::{create_pool, get_connection, run_migrations, DbConnection, DbPool};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from fleetbooks-core for convenience
pub use fleetbooks_core::errors::{DatabaseError, Error, Result};
