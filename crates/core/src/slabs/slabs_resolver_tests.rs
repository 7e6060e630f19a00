//! Unit and property tests for the two resolution strategies.

use super::*;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn slab(min: u32, max: Option<u32>, rate: i64) -> Slab {
    Slab {
        min_trips: min,
        max_trips: max,
        rate: rate.into(),
    }
}

fn rent_resolver() -> std::sync::Arc<dyn RateResolver> {
    SlabTable::new(
        "rent",
        SlabConvention::Ascending,
        vec![
            slab(0, Some(64), 980),
            slab(64, Some(80), 830),
            slab(80, Some(110), 740),
            slab(110, Some(125), 560),
            slab(125, Some(140), 410),
            slab(140, None, 290),
        ],
    )
    .unwrap()
    .into_resolver()
}

fn earnings_resolver() -> std::sync::Arc<dyn RateResolver> {
    SlabTable::new(
        "earnings",
        SlabConvention::Descending,
        vec![
            slab(12, None, 535),
            slab(11, None, 585),
            slab(10, None, 635),
            slab(8, None, 715),
            slab(5, None, 745),
            slab(0, None, 795),
        ],
    )
    .unwrap()
    .into_resolver()
}

#[test]
fn test_ascending_resolution_half_open_bounds() {
    let resolver = rent_resolver();
    assert_eq!(resolver.resolve(0), dec!(980));
    assert_eq!(resolver.resolve(63), dec!(980));
    assert_eq!(resolver.resolve(64), dec!(830));
    assert_eq!(resolver.resolve(79), dec!(830));
    assert_eq!(resolver.resolve(80), dec!(740));
    assert_eq!(resolver.resolve(139), dec!(410));
    assert_eq!(resolver.resolve(140), dec!(290));
    assert_eq!(resolver.resolve(10_000), dec!(290));
}

#[test]
fn test_descending_resolution_first_match_wins() {
    let resolver = earnings_resolver();
    assert_eq!(resolver.resolve(12), dec!(535));
    assert_eq!(resolver.resolve(30), dec!(535));
    assert_eq!(resolver.resolve(11), dec!(585));
    assert_eq!(resolver.resolve(10), dec!(635));
    assert_eq!(resolver.resolve(9), dec!(715));
    assert_eq!(resolver.resolve(8), dec!(715));
    assert_eq!(resolver.resolve(7), dec!(745));
    assert_eq!(resolver.resolve(5), dec!(745));
    assert_eq!(resolver.resolve(4), dec!(795));
    assert_eq!(resolver.resolve(0), dec!(795));
}

#[test]
fn test_resolver_carries_table_name() {
    assert_eq!(rent_resolver().table_name(), "rent");
    assert_eq!(earnings_resolver().table_name(), "earnings");
}

/// Generates a valid ascending table: contiguous half-open tiers from 0 with
/// an unbounded top, each tier carrying a distinct rate equal to its index
/// so a test can tell which tier matched.
fn arb_ascending_table() -> impl Strategy<Value = SlabTable> {
    prop::collection::vec(1u32..200, 1..8).prop_map(|widths| {
        let mut slabs = Vec::with_capacity(widths.len() + 1);
        let mut lower = 0u32;
        for (i, width) in widths.iter().enumerate() {
            slabs.push(Slab {
                min_trips: lower,
                max_trips: Some(lower + width),
                rate: Decimal::from(i as i64),
            });
            lower += width;
        }
        slabs.push(Slab {
            min_trips: lower,
            max_trips: None,
            rate: Decimal::from(slabs.len() as i64),
        });
        SlabTable::new("generated", SlabConvention::Ascending, slabs).unwrap()
    })
}

proptest! {
    /// Every trip count resolves to exactly one ascending tier: the rate
    /// identifies the tier, and that tier's bounds contain the count.
    #[test]
    fn prop_ascending_resolves_to_exactly_one_tier(
        table in arb_ascending_table(),
        trip_count in 0u32..5_000,
    ) {
        let matching: Vec<&Slab> = table
            .slabs()
            .iter()
            .filter(|s| {
                trip_count >= s.min_trips
                    && s.max_trips.map_or(true, |max| trip_count < max)
            })
            .collect();
        prop_assert_eq!(matching.len(), 1);

        let resolver = table.clone().into_resolver();
        prop_assert_eq!(resolver.resolve(trip_count), matching[0].rate);
    }

    /// Dropping an interior tier from a valid table always produces a gap
    /// rejection, never a silently defaulted rate.
    #[test]
    fn prop_ascending_with_hole_is_rejected(table in arb_ascending_table()) {
        prop_assume!(table.slabs().len() >= 3);
        let mut slabs = table.slabs().to_vec();
        slabs.remove(1);
        let result = SlabTable::new("generated", SlabConvention::Ascending, slabs);
        let rejected_as_gap = matches!(&result, Err(SlabConfigError::Gap { .. }));
        prop_assert!(rejected_as_gap, "expected a gap rejection, got {:?}", result);
    }

    /// Descending resolution picks the highest threshold at or below the
    /// trip count, for arbitrary threshold sets that include the catch-all.
    #[test]
    fn prop_descending_picks_highest_satisfied_threshold(
        thresholds in prop::collection::btree_set(1u32..100, 0..6),
        trip_count in 0u32..200,
    ) {
        let mut slabs: Vec<Slab> = thresholds
            .iter()
            .map(|&t| Slab {
                min_trips: t,
                max_trips: None,
                rate: Decimal::from(t as i64),
            })
            .collect();
        slabs.push(Slab {
            min_trips: 0,
            max_trips: None,
            rate: Decimal::ZERO,
        });

        let resolver = SlabTable::new("generated", SlabConvention::Descending, slabs)
            .unwrap()
            .into_resolver();

        let expected = thresholds
            .iter()
            .rev()
            .find(|&&t| trip_count >= t)
            .copied()
            .unwrap_or(0);
        prop_assert_eq!(resolver.resolve(trip_count), Decimal::from(expected as i64));
    }
}
