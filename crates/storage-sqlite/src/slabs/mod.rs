//! Slab table configuration storage.

mod model;
mod repository;

pub use model::{SlabRowDB, SlabTableDB};
pub use repository::SlabConfigRepository;

pub use fleetbooks_core::slabs::SlabConfigSourceTrait;
