//! RZD upstream client.
//!
//! The ticketing backend has no stable public contract. Key quirks this
//! module absorbs:
//! - stop times are wall-clock only ("HH:MM:SS" or "HH:MM"), never dated;
//!   the calendar date has to be inferred from time-of-day rollovers
//! - the pricing and departed-trains endpoints use different field names
//!   for the same timestamps
//! - the route endpoint demands `Provider`/`serviceProvider` parameters
//!   that a train number alone does not carry

mod client;
pub mod convert;
mod error;
pub mod mock;
mod types;

pub use client::{RzdClient, RzdConfig};
pub use error::RzdError;
pub use types::{
    PricingResponse, RawTrain, RouteStop, RouteVariant, SuggestResponse, SuggestStation,
    TrainRouteResponse,
};

use chrono::NaiveDate;

/// Provider routing parameter substituted when the upstream leaves it blank.
pub const DEFAULT_PROVIDER: &str = "P1";

/// Service-provider routing parameter substituted when the upstream leaves
/// it blank.
pub const DEFAULT_SERVICE: &str = "B2B_RZD";

/// Parameters for the train route (stops) endpoint.
#[derive(Debug, Clone, Copy)]
pub struct TrainRouteQuery<'a> {
    pub train_number: &'a str,
    pub origin: &'a str,
    pub destination: &'a str,
    pub provider: &'a str,
    pub service: &'a str,
    /// The upstream requires a concrete date; callers pass today even
    /// though the true departure date may differ.
    pub departure_date: NaiveDate,
}
