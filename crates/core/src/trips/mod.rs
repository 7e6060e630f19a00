//! Trip records - upstream-owned daily counts the engine reads.

mod trips_model;
mod trips_traits;

pub use trips_model::*;
pub use trips_traits::*;
