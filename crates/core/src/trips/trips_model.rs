use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Approval state of a trip record. Records are created and approved by the
/// upstream ingestion workflow; the engine only ever reads approved ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl TripStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Pending => "PENDING",
            TripStatus::Approved => "APPROVED",
            TripStatus::Rejected => "REJECTED",
        }
    }
}

impl std::str::FromStr for TripStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(TripStatus::Pending),
            "APPROVED" => Ok(TripStatus::Approved),
            "REJECTED" => Ok(TripStatus::Rejected),
            other => Err(format!("unknown trip status: {}", other)),
        }
    }
}

/// One vehicle-day of trips. Immutable once approved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRecord {
    pub id: String,
    pub vehicle_id: String,
    pub date: NaiveDate,
    pub trip_count: u32,
    pub status: TripStatus,
}

impl TripRecord {
    pub fn is_approved(&self) -> bool {
        self.status == TripStatus::Approved
    }
}
