use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// An inclusive date window over which trips are aggregated and rent is
/// reconciled. Construction validates the bounds; an inverted window is
/// rejected before any computation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    start: NaiveDate,
    end: NaiveDate,
}

impl Period {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(ValidationError::InvalidPeriod { start, end }.into());
        }
        Ok(Period { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// True if the date falls inside the window (both bounds inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// True if the `[other_start, other_end]` range intersects this window.
    pub fn overlaps(&self, other_start: NaiveDate, other_end: NaiveDate) -> bool {
        other_start <= self.end && other_end >= self.start
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
