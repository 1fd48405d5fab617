//! Station resolver.

use std::sync::Arc;

use tracing::warn;

use crate::domain::StationMatch;
use crate::rzd::convert::filter_station_matches;

use super::{Gateway, RzdApi};

impl<C: RzdApi> Gateway<C> {
    /// Resolve a (partial) station name to `(name, code)` matches.
    ///
    /// Transport or parsing failure degrades to an empty list; callers
    /// must treat empty as "not found" and cannot distinguish a transient
    /// upstream error. Cached by the raw query string for the long TTL —
    /// station metadata changes rarely.
    pub async fn resolve_stations(&self, query: &str) -> Arc<Vec<StationMatch>> {
        if let Some(hit) = self.cache.stations.get(query).await {
            return hit;
        }

        let matches = match self.client.suggest_stations(query).await {
            Ok(resp) => filter_station_matches(&resp, query),
            Err(e) => {
                warn!(query, error = %e, "station suggest failed, returning no matches");
                Vec::new()
            }
        };

        let entry = Arc::new(matches);
        self.cache
            .stations
            .insert(query.to_string(), entry.clone())
            .await;
        entry
    }
}
