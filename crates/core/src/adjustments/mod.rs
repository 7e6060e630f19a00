//! Financial adjustments: global categories, manual per-vehicle entries,
//! the three-layer profit/loss ledger, and the category edit queue.

mod adjustments_model;
mod adjustments_traits;
mod edit_queue;
mod ledger;

pub use adjustments_model::*;
pub use adjustments_traits::*;
pub use edit_queue::*;
pub use ledger::*;


#[cfg(test)]
mod edit_queue_tests;
