//! The aggregation layer.
//!
//! Correlates four independent upstream endpoints into one consistent,
//! time-aware view, tolerating partial upstream failure. Resolver methods
//! never propagate upstream errors: each one pattern-matches the inner
//! fetch `Result` and applies its documented degraded value (empty list,
//! empty stop array, fallback route string). No failure here is fatal to
//! the process.
//!
//! Control flow: station-name lookup feeds the route aggregator, which
//! feeds the provider/service correlator, which feeds the stops resolver.
//! Each layer is cached independently.

mod correlate;
mod routes;
mod stations;
mod stops;

pub use stops::StopsQuery;

use chrono::NaiveDate;

use crate::cache::{CacheConfig, GatewayCache};
use crate::rzd::{
    PricingResponse, RawTrain, RzdClient, RzdError, SuggestResponse, TrainRouteQuery,
    TrainRouteResponse,
};

/// The upstream call surface the gateway depends on.
///
/// A seam for testing: production wires in [`RzdClient`], tests wire in
/// [`crate::rzd::mock::MockRzd`]. Only ever used with concrete types, so
/// the missing `Send` bounds on the returned futures don't bite.
#[allow(async_fn_in_trait)]
pub trait RzdApi {
    async fn suggest_stations(&self, query: &str) -> Result<SuggestResponse, RzdError>;

    async fn train_route(&self, query: &TrainRouteQuery<'_>)
    -> Result<TrainRouteResponse, RzdError>;

    async fn train_pricing(
        &self,
        origin: &str,
        destination: &str,
        date: NaiveDate,
    ) -> Result<PricingResponse, RzdError>;

    async fn departed_trains(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<RawTrain>, RzdError>;
}

impl RzdApi for RzdClient {
    async fn suggest_stations(&self, query: &str) -> Result<SuggestResponse, RzdError> {
        RzdClient::suggest_stations(self, query).await
    }

    async fn train_route(
        &self,
        query: &TrainRouteQuery<'_>,
    ) -> Result<TrainRouteResponse, RzdError> {
        RzdClient::train_route(self, query).await
    }

    async fn train_pricing(
        &self,
        origin: &str,
        destination: &str,
        date: NaiveDate,
    ) -> Result<PricingResponse, RzdError> {
        RzdClient::train_pricing(self, origin, destination, date).await
    }

    async fn departed_trains(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<RawTrain>, RzdError> {
        RzdClient::departed_trains(self, origin, destination).await
    }
}

/// The aggregation engine: one upstream client plus the per-resolver
/// caches. Constructed once at process start and shared behind an `Arc`.
pub struct Gateway<C> {
    client: C,
    cache: GatewayCache,
}

impl<C: RzdApi> Gateway<C> {
    /// Create a gateway over the given upstream client.
    pub fn new(client: C, cache_config: &CacheConfig) -> Self {
        Self {
            client,
            cache: GatewayCache::new(cache_config),
        }
    }
}
