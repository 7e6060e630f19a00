use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single pricing tier: a trip-count range mapped to a fixed rate.
/// `max_trips = None` marks the unbounded top tier of an ascending table;
/// descending tables only use `min_trips` as a threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slab {
    pub min_trips: u32,
    pub max_trips: Option<u32>,
    pub rate: Decimal,
}

/// Resolution convention of a slab table, fixed at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlabConvention {
    /// Half-open contiguous tiers; the unique tier with
    /// `min_trips <= n < max_trips` wins.
    Ascending,
    /// Threshold list scanned highest-first; the first tier with
    /// `n >= min_trips` wins.
    Descending,
}

impl std::fmt::Display for SlabConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlabConvention::Ascending => write!(f, "ascending"),
            SlabConvention::Descending => write!(f, "descending"),
        }
    }
}

/// Fatal configuration errors detected when a slab table is loaded.
/// A malformed table blocks report generation entirely; the engine never
/// silently defaults a rate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlabConfigError {
    #[error("slab table '{table}' is empty")]
    Empty { table: String },

    #[error("slab table '{table}' does not cover trip counts below {lowest_min}")]
    UncoveredFloor { table: String, lowest_min: u32 },

    #[error("slab table '{table}' has overlapping tiers at trip count {at}")]
    Overlap { table: String, at: u32 },

    #[error("slab table '{table}' has a gap between {gap_start} and {gap_end}")]
    Gap {
        table: String,
        gap_start: u32,
        gap_end: u32,
    },

    #[error("slab table '{table}' has no unbounded top tier")]
    MissingUnboundedTop { table: String },

    #[error("slab table '{table}' has more than one unbounded tier")]
    MultipleUnboundedTiers { table: String },

    #[error("slab table '{table}' declares duplicate threshold {threshold}")]
    DuplicateThreshold { table: String, threshold: u32 },

    #[error("slab table '{table}' tier has max_trips {max} not above min_trips {min}")]
    EmptyTier { table: String, min: u32, max: u32 },
}

/// A validated, ordered tier lookup table.
///
/// Invariants established by [`SlabTable::new`] and relied on by the
/// resolvers:
/// - ascending tables are sorted by `min_trips`, start at 0, are contiguous
///   and non-overlapping, and end in exactly one unbounded tier;
/// - descending tables are sorted by threshold descending, carry no duplicate
///   thresholds, and include a 0 threshold catch-all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlabTable {
    name: String,
    convention: SlabConvention,
    slabs: Vec<Slab>,
}

impl SlabTable {
    /// Validates and builds a table. Every rule violation names the table
    /// and the offending bound so operators can fix the configuration.
    pub fn new(
        name: impl Into<String>,
        convention: SlabConvention,
        mut slabs: Vec<Slab>,
    ) -> Result<Self, SlabConfigError> {
        let name = name.into();
        if slabs.is_empty() {
            return Err(SlabConfigError::Empty { table: name });
        }

        match convention {
            SlabConvention::Ascending => {
                slabs.sort_by_key(|s| s.min_trips);
                Self::validate_ascending(&name, &slabs)?;
            }
            SlabConvention::Descending => {
                slabs.sort_by(|a, b| b.min_trips.cmp(&a.min_trips));
                Self::validate_descending(&name, &slabs)?;
            }
        }

        Ok(SlabTable {
            name,
            convention,
            slabs,
        })
    }

    fn validate_ascending(name: &str, sorted: &[Slab]) -> Result<(), SlabConfigError> {
        let first = &sorted[0];
        if first.min_trips > 0 {
            return Err(SlabConfigError::UncoveredFloor {
                table: name.to_string(),
                lowest_min: first.min_trips,
            });
        }

        let mut unbounded = 0usize;
        for slab in sorted {
            match slab.max_trips {
                None => unbounded += 1,
                Some(max) if max <= slab.min_trips => {
                    return Err(SlabConfigError::EmptyTier {
                        table: name.to_string(),
                        min: slab.min_trips,
                        max,
                    });
                }
                Some(_) => {}
            }
        }
        if unbounded == 0 {
            return Err(SlabConfigError::MissingUnboundedTop {
                table: name.to_string(),
            });
        }
        if unbounded > 1 {
            return Err(SlabConfigError::MultipleUnboundedTiers {
                table: name.to_string(),
            });
        }

        for pair in sorted.windows(2) {
            let (low, high) = (&pair[0], &pair[1]);
            match low.max_trips {
                // The unbounded tier swallows everything above it; anything
                // sorted after it necessarily overlaps.
                None => {
                    return Err(SlabConfigError::Overlap {
                        table: name.to_string(),
                        at: high.min_trips,
                    });
                }
                Some(max) if max > high.min_trips => {
                    return Err(SlabConfigError::Overlap {
                        table: name.to_string(),
                        at: high.min_trips,
                    });
                }
                Some(max) if max < high.min_trips => {
                    return Err(SlabConfigError::Gap {
                        table: name.to_string(),
                        gap_start: max,
                        gap_end: high.min_trips,
                    });
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    fn validate_descending(name: &str, sorted_desc: &[Slab]) -> Result<(), SlabConfigError> {
        for pair in sorted_desc.windows(2) {
            if pair[0].min_trips == pair[1].min_trips {
                return Err(SlabConfigError::DuplicateThreshold {
                    table: name.to_string(),
                    threshold: pair[0].min_trips,
                });
            }
        }
        // The lowest threshold is the catch-all; if it sits above zero the
        // table leaves low trip counts unresolved.
        let lowest = sorted_desc.last().map(|s| s.min_trips).unwrap_or(0);
        if lowest > 0 {
            return Err(SlabConfigError::UncoveredFloor {
                table: name.to_string(),
                lowest_min: lowest,
            });
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn convention(&self) -> SlabConvention {
        self.convention
    }

    /// Tiers in resolution order: ascending tables by `min_trips` ascending,
    /// descending tables by threshold descending.
    pub fn slabs(&self) -> &[Slab] {
        &self.slabs
    }
}
