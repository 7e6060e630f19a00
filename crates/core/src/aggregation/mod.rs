//! Per-vehicle period aggregation of approved trip records.

mod aggregation_model;
mod aggregation_service;

pub use aggregation_model::*;
pub use aggregation_service::*;
