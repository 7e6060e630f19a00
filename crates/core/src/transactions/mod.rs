//! Transaction-history summaries supplied by the external ledger.

mod transactions_model;
mod transactions_traits;

pub use transactions_model::*;
pub use transactions_traits::*;
