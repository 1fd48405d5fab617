//! Domain types for the gateway.
//!
//! Request-scoped value objects, constructed fresh per upstream fetch (or
//! served from cache), never mutated after publication.

mod station;
mod stop;
mod train;

pub use station::StationMatch;
pub use stop::{StopRecord, StopStatus, TrainStops};
pub use train::{RouteBoard, RouteInfo, TrainCategory, TrainSummary};
