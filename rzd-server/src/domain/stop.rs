//! Per-train stop schedules.

use chrono::NaiveDateTime;

/// Coarse status of a single stop, derived from its departure time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopStatus {
    /// Departure more than 20 minutes away.
    Scheduled,
    /// 0-20 minutes until departure.
    Boarding,
    /// Departure is in the past.
    Departed,
    /// Arrival or departure time missing upstream.
    Unknown,
}

impl StopStatus {
    /// Wire representation, matching the status strings the API has
    /// always served.
    pub fn as_str(&self) -> &'static str {
        match self {
            StopStatus::Scheduled => "SCH",
            StopStatus::Boarding => "ARR/APR",
            StopStatus::Departed => "DEP",
            StopStatus::Unknown => "UNK",
        }
    }
}

/// One stop on a train's route.
///
/// Sequence order is physical route order as returned upstream; stops are
/// never reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopRecord {
    pub name: String,

    /// Numeric station code as a string; empty when the upstream omitted it.
    pub code: String,

    /// Full timestamp with the inferred calendar date.
    pub arrival: Option<NaiveDateTime>,

    /// Full timestamp with the inferred calendar date.
    pub departure: Option<NaiveDateTime>,

    /// Dwell time in minutes. `None` means the upstream did not say,
    /// which is not the same as a zero-minute stop.
    pub dwell_minutes: Option<i64>,

    /// Whether this stop is one of the two queried endpoints.
    pub is_target: bool,

    pub status: StopStatus,
}

/// A train's resolved stop list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainStops {
    /// The queried train number, echoed back.
    pub train: String,

    /// Empty when the upstream failed or had no route data.
    pub stops: Vec<StopRecord>,
}
