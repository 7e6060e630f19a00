//! Source trait for slab table configuration.

use crate::errors::Result;

use super::SlabTable;

/// Loads a configured slab table by name. Implemented by the storage layer;
/// validation happens in [`SlabTable::new`] so a malformed configuration
/// surfaces here as a fatal error, before any report is built.
pub trait SlabConfigSourceTrait: Send + Sync {
    fn load(&self, table_name: &str) -> Result<SlabTable>;
}
