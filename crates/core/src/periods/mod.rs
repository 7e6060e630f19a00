//! Reporting period - the date window every engine operation is scoped to.

mod period_model;

pub use period_model::*;
