//! Result caches for the gateway.
//!
//! One cache per resolver, each keyed by the exact normalized request
//! parameters. Station and stop data is network-stable and cached for a
//! long TTL; the aggregated train list reflects live status and gets a
//! short one. Entries are immutable `Arc`s, so the get-then-insert race
//! on concurrent misses is benign: worst case is one redundant upstream
//! fetch. Expiry is lazy (moka TTL), no background eviction.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{RouteBoard, StationMatch, TrainStops};
use crate::gateway::StopsQuery;

/// Configuration for the gateway caches.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for station and stop lookups (network-stable data).
    pub long_ttl: Duration,

    /// TTL for aggregated train lists (live status data).
    pub short_ttl: Duration,

    /// Maximum number of entries per cache.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            long_ttl: Duration::from_secs(72_000), // 20 hours
            short_ttl: Duration::from_secs(300),
            max_capacity: 10_000,
        }
    }
}

/// The three per-resolver caches.
pub struct GatewayCache {
    /// Station matches, keyed by the raw query string.
    pub(crate) stations: MokaCache<String, Arc<Vec<StationMatch>>>,

    /// Aggregated train boards, keyed by (origin code, destination code).
    pub(crate) routes: MokaCache<(String, String), Arc<RouteBoard>>,

    /// Per-train stop lists, keyed by the full stops query.
    pub(crate) stops: MokaCache<StopsQuery, Arc<TrainStops>>,
}

impl GatewayCache {
    /// Create the caches from the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            stations: MokaCache::builder()
                .time_to_live(config.long_ttl)
                .max_capacity(config.max_capacity)
                .build(),
            routes: MokaCache::builder()
                .time_to_live(config.short_ttl)
                .max_capacity(config.max_capacity)
                .build(),
            stops: MokaCache::builder()
                .time_to_live(config.long_ttl)
                .max_capacity(config.max_capacity)
                .build(),
        }
    }
}
