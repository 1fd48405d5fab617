//! Stops resolver.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use tracing::warn;

use crate::domain::{StopRecord, TrainStops};
use crate::rzd::convert::normalize_stops;
use crate::rzd::{RzdError, TrainRouteQuery};

use super::{Gateway, RzdApi};

/// Normalized request signature for one train's stop list. Doubles as the
/// cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StopsQuery {
    pub train_number: String,
    pub origin_code: String,
    pub dest_code: String,
    pub provider: String,
    pub service: String,
}

impl<C: RzdApi> Gateway<C> {
    /// Resolve the stop schedule for one train.
    ///
    /// Any failure — transport, malformed payload, empty route list —
    /// degrades to an empty stop list for that train; the error is never
    /// propagated. Cached by the full query for the long TTL.
    pub async fn resolve_stops(&self, query: &StopsQuery) -> Arc<TrainStops> {
        if let Some(hit) = self.cache.stops.get(query).await {
            return hit;
        }

        let now = Local::now().naive_local();
        let stops = match self.fetch_stops(query, now).await {
            Ok(stops) => stops,
            Err(e) => {
                warn!(
                    train = %query.train_number,
                    error = %e,
                    "train route fetch failed, returning empty stop list"
                );
                Vec::new()
            }
        };

        let entry = Arc::new(TrainStops {
            train: query.train_number.clone(),
            stops,
        });
        self.cache.stops.insert(query.clone(), entry.clone()).await;
        entry
    }

    async fn fetch_stops(
        &self,
        query: &StopsQuery,
        now: NaiveDateTime,
    ) -> Result<Vec<StopRecord>, RzdError> {
        let response = self
            .client
            .train_route(&TrainRouteQuery {
                train_number: &query.train_number,
                origin: &query.origin_code,
                destination: &query.dest_code,
                provider: &query.provider,
                service: &query.service,
                departure_date: now.date(),
            })
            .await?;

        let raw = response
            .routes
            .first()
            .map(|r| r.route_stops.as_slice())
            .unwrap_or(&[]);

        let targets = target_codes(&query.origin_code, &query.dest_code);
        Ok(normalize_stops(raw, &targets, now))
    }
}

/// Numeric parses of the two queried codes; non-numeric input contributes
/// nothing rather than failing the request.
fn target_codes(origin: &str, dest: &str) -> HashSet<i64> {
    [origin, dest]
        .iter()
        .filter_map(|c| c.parse().ok())
        .collect()
}
