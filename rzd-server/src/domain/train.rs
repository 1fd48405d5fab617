//! Train listings between two stations.

use chrono::NaiveDateTime;

/// Train category, decoded from the upstream's magic category code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainCategory {
    Express,
    Regular,
}

impl TrainCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainCategory::Express => "EXPRESS",
            TrainCategory::Regular => "REGULAR",
        }
    }
}

/// One train between the queried station pair.
///
/// `number` is the identity key within a `(origin, destination)` query;
/// it is not globally unique (numbers repeat across dates and services).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainSummary {
    pub number: String,

    /// Brand name ("САПСАН" and friends); empty when the upstream has none.
    pub name: String,

    pub category: TrainCategory,

    /// "ORIGIN - DEST". Starts as the upstream-provided fallback and is
    /// overwritten with the stop-derived value when stop data resolves.
    pub route: String,

    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,

    /// Human-readable train type; never empty (defaulted by category).
    pub train_type: String,

    pub train_class: Option<String>,

    /// Routing parameter for the stops endpoint.
    pub provider: String,

    /// Routing parameter for the stops endpoint.
    pub service: String,
}

/// Origin/destination names for the queried pair, as the pricing endpoint
/// reports them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteInfo {
    pub origin: String,
    pub destination: String,
}

/// The aggregated train list for one station pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteBoard {
    pub info: RouteInfo,

    /// Sorted ascending by departure.
    pub trains: Vec<TrainSummary>,
}
