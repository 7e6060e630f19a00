//! Source trait for the external transaction-history ledger.

use async_trait::async_trait;

use crate::errors::Result;
use crate::periods::Period;

use super::TransactionSummary;

/// Fetches the netted transaction history for one vehicle over a period.
/// This is remote I/O; the report builder fans these calls out with bounded
/// parallelism and degrades the affected row on failure rather than
/// aborting the report.
#[async_trait]
pub trait TransactionSummarySourceTrait: Send + Sync {
    async fn get(&self, vehicle_id: &str, period: &Period) -> Result<TransactionSummary>;
}
