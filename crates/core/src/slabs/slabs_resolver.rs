use std::sync::Arc;

use rust_decimal::Decimal;

use super::slabs_model::{Slab, SlabConvention, SlabTable};

/// Resolves a trip count to a rate. The two slab conventions are separate
/// strategies behind this trait so a call site can never mix them; a
/// resolver only exists for a table that already passed load-time
/// validation, so resolution is total over all trip counts.
pub trait RateResolver: Send + Sync {
    fn resolve(&self, trip_count: u32) -> Decimal;

    /// Name of the slab table this resolver was built from.
    fn table_name(&self) -> &str;
}

/// Ascending convention: the unique tier with `min_trips <= n < max_trips`
/// (`max_trips = None` reads as infinity). Used by the rent table, resolved
/// once per period on the cumulative trip count.
pub struct AscendingSlabResolver {
    name: String,
    slabs: Vec<Slab>,
}

impl RateResolver for AscendingSlabResolver {
    fn resolve(&self, trip_count: u32) -> Decimal {
        // Validation guarantees contiguous coverage from 0 with an unbounded
        // top tier, so exactly one tier matches.
        self.slabs
            .iter()
            .find(|s| {
                trip_count >= s.min_trips && s.max_trips.map_or(true, |max| trip_count < max)
            })
            .map(|s| s.rate)
            .unwrap_or_else(|| unreachable!("validated ascending table left {} uncovered", trip_count))
    }

    fn table_name(&self) -> &str {
        &self.name
    }
}

/// Descending convention: thresholds scanned highest-first, first tier with
/// `n >= threshold` wins; the 0 threshold acts as the catch-all. Used by the
/// earnings table, resolved independently for each day's trip count.
pub struct DescendingSlabResolver {
    name: String,
    slabs: Vec<Slab>,
}

impl RateResolver for DescendingSlabResolver {
    fn resolve(&self, trip_count: u32) -> Decimal {
        self.slabs
            .iter()
            .find(|s| trip_count >= s.min_trips)
            .map(|s| s.rate)
            .unwrap_or_else(|| unreachable!("validated descending table left {} uncovered", trip_count))
    }

    fn table_name(&self) -> &str {
        &self.name
    }
}

impl SlabTable {
    /// Consumes the validated table and yields the resolver strategy for its
    /// convention.
    pub fn into_resolver(self) -> Arc<dyn RateResolver> {
        let convention = self.convention();
        let name = self.name().to_string();
        let slabs = self.slabs().to_vec();
        match convention {
            SlabConvention::Ascending => Arc::new(AscendingSlabResolver { name, slabs }),
            SlabConvention::Descending => Arc::new(DescendingSlabResolver { name, slabs }),
        }
    }
}
