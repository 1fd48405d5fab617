//! Route aggregator.
//!
//! Merges the pricing and departed-trains endpoints into one train list,
//! then resolves each train's real route string from its stop schedule.

use std::sync::Arc;

use chrono::Local;
use futures::future::join_all;
use tracing::{debug, warn};

use crate::domain::{RouteBoard, RouteInfo, TrainStops, TrainSummary};
use crate::rzd::convert::{UNKNOWN_NAME, summarize_train};
use crate::rzd::{PricingResponse, RawTrain};

use super::stops::StopsQuery;
use super::{Gateway, RzdApi};

impl<C: RzdApi> Gateway<C> {
    /// List trains between two station codes, sorted ascending by
    /// departure.
    ///
    /// Cached by the code pair for the short TTL — train statuses and
    /// prices are live data.
    pub async fn list_trains(&self, origin_code: &str, dest_code: &str) -> Arc<RouteBoard> {
        let key = (origin_code.to_string(), dest_code.to_string());
        if let Some(hit) = self.cache.routes.get(&key).await {
            return hit;
        }

        let entry = Arc::new(self.fetch_board(origin_code, dest_code).await);
        self.cache.routes.insert(key, entry.clone()).await;
        entry
    }

    async fn fetch_board(&self, origin_code: &str, dest_code: &str) -> RouteBoard {
        let today = Local::now().date_naive();

        // Fan-out to both sources at once. Each failure is isolated: the
        // other source's data is still used.
        let (pricing, departed) = tokio::join!(
            self.client.train_pricing(origin_code, dest_code, today),
            self.client.departed_trains(origin_code, dest_code),
        );

        let pricing = match pricing {
            Ok(p) => p,
            Err(e) => {
                warn!(origin_code, dest_code, error = %e, "train pricing failed");
                PricingResponse::default()
            }
        };
        let departed = match departed {
            Ok(d) => d,
            Err(e) => {
                warn!(origin_code, dest_code, error = %e, "departed trains failed");
                Vec::new()
            }
        };

        // Departed-trains first, then pricing. Trains reported by both
        // sources are intentionally NOT de-duplicated by number: the
        // upstream rarely double-reports, and current consumers rely on
        // seeing both entries when it does.
        let mut trains: Vec<TrainSummary> = departed
            .iter()
            .chain(pricing.trains.iter())
            .filter_map(|raw| {
                let summary = summarize_train(raw);
                if summary.is_none() {
                    debug!(number = dropped_number(raw), "dropping unparsable train entry");
                }
                summary
            })
            .collect();

        // Second fan-out: resolve each train's real route from its stop
        // schedule. Any failure keeps the upstream-provided fallback.
        let routes = join_all(trains.iter().map(|train| {
            let query = StopsQuery {
                train_number: train.number.clone(),
                origin_code: origin_code.to_string(),
                dest_code: dest_code.to_string(),
                provider: train.provider.clone(),
                service: train.service.clone(),
            };
            async move { stop_derived_route(&*self.resolve_stops(&query).await) }
        }))
        .await;

        for (train, route) in trains.iter_mut().zip(routes) {
            if let Some(route) = route {
                train.route = route;
            }
        }

        trains.sort_by_key(|t| t.departure);

        RouteBoard {
            info: RouteInfo {
                origin: pricing
                    .origin_station_name
                    .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
                destination: pricing
                    .destination_station_name
                    .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            },
            trains,
        }
    }
}

/// "FIRST - LAST" from resolved stops; a single stop yields just its name,
/// no stops yields `None` (keep the fallback).
fn stop_derived_route(stops: &TrainStops) -> Option<String> {
    match stops.stops.as_slice() {
        [] => None,
        [only] => Some(only.name.clone()),
        [first, .., last] => Some(format!("{} - {}", first.name, last.name)),
    }
}

fn dropped_number(raw: &RawTrain) -> &str {
    raw.train_number.as_deref().unwrap_or("?")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheConfig;
    use crate::rzd::mock::MockRzd;
    use crate::rzd::{RouteStop, RouteVariant, TrainRouteResponse};
    use std::sync::atomic::Ordering;

    fn raw_train(number: &str, dep: &str, arr: &str) -> RawTrain {
        RawTrain {
            train_number: Some(number.to_string()),
            departure_date_time: Some(dep.to_string()),
            arrival_date_time: Some(arr.to_string()),
            origin_name: Some("МОСКВА".to_string()),
            destination_name: Some("СПБ".to_string()),
            ..Default::default()
        }
    }

    fn pricing(trains: Vec<RawTrain>) -> PricingResponse {
        PricingResponse {
            origin_station_name: Some("МОСКВА".to_string()),
            destination_station_name: Some("СПБ".to_string()),
            trains,
        }
    }

    fn route_response(names: &[(&str, i64)]) -> TrainRouteResponse {
        TrainRouteResponse {
            routes: vec![RouteVariant {
                route_stops: names
                    .iter()
                    .enumerate()
                    .map(|(i, (name, code))| RouteStop {
                        station_name: name.to_string(),
                        station_code: Some(*code),
                        arrival_time: Some(format!("{:02}:00:00", 8 + i)),
                        departure_time: Some(format!("{:02}:05:00", 8 + i)),
                        stop_duration: Some(5),
                    })
                    .collect(),
            }],
        }
    }

    #[tokio::test]
    async fn merges_both_sources_sorted_by_departure() {
        let mock = MockRzd::new()
            .with_pricing(pricing(vec![raw_train(
                "054Ч",
                "2023-10-27T23:30:00",
                "2023-10-28T08:15:00",
            )]))
            .with_departed(vec![raw_train(
                "716А",
                "2023-10-27T06:45:00",
                "2023-10-27T10:30:00",
            )]);
        let gateway = Gateway::new(mock, &CacheConfig::default());

        let board = gateway.list_trains("2006004", "2004001").await;
        assert_eq!(board.info.origin, "МОСКВА");
        assert_eq!(board.info.destination, "СПБ");
        let numbers: Vec<_> = board.trains.iter().map(|t| t.number.as_str()).collect();
        assert_eq!(numbers, ["716А", "054Ч"]);
    }

    #[tokio::test]
    async fn pricing_failure_still_returns_departed_subset() {
        let mock = MockRzd::new().with_departed(vec![
            raw_train("716А", "2023-10-27T06:45:00", "2023-10-27T10:30:00"),
            raw_train("102В", "2023-10-27T05:00:00", "2023-10-27T09:00:00"),
        ]);
        let gateway = Gateway::new(mock, &CacheConfig::default());

        let board = gateway.list_trains("2006004", "2004001").await;
        let numbers: Vec<_> = board.trains.iter().map(|t| t.number.as_str()).collect();
        assert_eq!(numbers, ["102В", "716А"]);
        // Pricing also carries the pair names; without it we degrade
        assert_eq!(board.info.origin, "Н/Д");
    }

    #[tokio::test]
    async fn both_sources_failing_yield_empty_board() {
        let mock = MockRzd::new();
        let gateway = Gateway::new(mock, &CacheConfig::default());

        let board = gateway.list_trains("2006004", "2004001").await;
        assert!(board.trains.is_empty());
    }

    #[tokio::test]
    async fn second_board_lookup_is_served_from_cache() {
        let mock = MockRzd::new()
            .with_pricing(pricing(vec![raw_train(
                "054Ч",
                "2023-10-27T23:30:00",
                "2023-10-28T08:15:00",
            )]))
            .with_departed(vec![]);
        let calls = mock.calls();
        let gateway = Gateway::new(mock, &CacheConfig::default());

        let first = gateway.list_trains("2006004", "2004001").await;
        let second = gateway.list_trains("2006004", "2004001").await;

        assert_eq!(first, second);
        assert_eq!(calls.pricing.load(Ordering::SeqCst), 1);
        assert_eq!(calls.departed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn same_train_in_both_sources_is_not_deduplicated() {
        let train = raw_train("054Ч", "2023-10-27T23:30:00", "2023-10-28T08:15:00");
        let mock = MockRzd::new()
            .with_pricing(pricing(vec![train.clone()]))
            .with_departed(vec![train]);
        let gateway = Gateway::new(mock, &CacheConfig::default());

        let board = gateway.list_trains("2006004", "2004001").await;
        assert_eq!(board.trains.len(), 2);
        assert_eq!(board.trains[0].number, "054Ч");
        assert_eq!(board.trains[1].number, "054Ч");
    }

    #[tokio::test]
    async fn route_is_derived_from_stops_when_available() {
        let mock = MockRzd::new()
            .with_pricing(pricing(vec![raw_train(
                "054Ч",
                "2023-10-27T23:30:00",
                "2023-10-28T08:15:00",
            )]))
            .with_departed(vec![])
            .with_route(
                "054Ч",
                route_response(&[
                    ("МОСКВА ОКТ", 2006004),
                    ("ТВЕРЬ", 2004600),
                    ("САНКТ-ПЕТЕРБУРГ-ГЛ", 2004001),
                ]),
            );
        let gateway = Gateway::new(mock, &CacheConfig::default());

        let board = gateway.list_trains("2006004", "2004001").await;
        assert_eq!(board.trains[0].route, "МОСКВА ОКТ - САНКТ-ПЕТЕРБУРГ-ГЛ");
    }

    #[tokio::test]
    async fn failed_stop_resolution_keeps_fallback_route() {
        // No canned route for this train number: stop resolution fails
        let mock = MockRzd::new()
            .with_pricing(pricing(vec![raw_train(
                "054Ч",
                "2023-10-27T23:30:00",
                "2023-10-28T08:15:00",
            )]))
            .with_departed(vec![]);
        let gateway = Gateway::new(mock, &CacheConfig::default());

        let board = gateway.list_trains("2006004", "2004001").await;
        assert_eq!(board.trains[0].route, "МОСКВА - СПБ");
    }

    #[tokio::test]
    async fn unparsable_entries_are_dropped_silently() {
        let bad = raw_train("закрыт", "не время", "2023-10-27T10:30:00");
        let mock = MockRzd::new()
            .with_pricing(pricing(vec![
                bad,
                raw_train("054Ч", "2023-10-27T23:30:00", "2023-10-28T08:15:00"),
            ]))
            .with_departed(vec![]);
        let gateway = Gateway::new(mock, &CacheConfig::default());

        let board = gateway.list_trains("2006004", "2004001").await;
        assert_eq!(board.trains.len(), 1);
        assert_eq!(board.trains[0].number, "054Ч");
    }

    #[test]
    fn single_stop_route_is_just_that_name() {
        let stops = TrainStops {
            train: "054Ч".to_string(),
            stops: vec![crate::domain::StopRecord {
                name: "ТВЕРЬ".to_string(),
                code: "2004600".to_string(),
                arrival: None,
                departure: None,
                dwell_minutes: None,
                is_target: false,
                status: crate::domain::StopStatus::Unknown,
            }],
        };
        assert_eq!(stop_derived_route(&stops).as_deref(), Some("ТВЕРЬ"));
    }
}
