//! Slab (tier) tables and trip-count rate resolution.
//!
//! Two independent tables exist: the rent table (ascending, half-open
//! contiguous tiers, resolved once per period on the cumulative trip count)
//! and the earnings table (descending thresholds, resolved per day). The
//! convention is fixed when a table is configured, never inferred, and each
//! convention is a separate resolver strategy behind [`RateResolver`].

mod slabs_model;
mod slabs_resolver;
mod slabs_traits;

pub use slabs_model::*;
pub use slabs_resolver::*;
pub use slabs_traits::*;

#[cfg(test)]
mod slabs_resolver_tests;
