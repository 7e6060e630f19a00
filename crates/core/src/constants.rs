/// Slab table name for rent resolution (ascending convention)
pub const RENT_SLAB_TABLE: &str = "rent";

/// Slab table name for earnings resolution (descending convention)
pub const EARNINGS_SLAB_TABLE: &str = "earnings";

/// Decimal precision for persisted ledger amounts
pub const DECIMAL_PRECISION: u32 = 6;

/// Working-day multiplier applied when a vehicle has no saved snapshot row
pub const DEFAULT_WORKING_DAY_MULTIPLIER: u32 = 1;

/// Batch size for parallel transaction-summary fetches during report builds
pub const SUMMARY_FETCH_BATCH_SIZE: usize = 8;

/// Per-vehicle deadline for a transaction-summary fetch; an elapsed fetch
/// degrades that row instead of stalling the report
pub const SUMMARY_FETCH_TIMEOUT_SECS: u64 = 10;
