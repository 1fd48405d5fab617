//! Conversion from RZD DTOs to domain types.
//!
//! All "variant field name" and "missing field" resolution lives here, in
//! one auditable place: the suggest filter, the train summary adapter, and
//! the stop-time normalizer that reconstructs calendar dates from
//! wall-clock-only stop times.

use std::collections::HashSet;

use chrono::{Days, NaiveDateTime, NaiveTime};

use crate::domain::{StationMatch, StopRecord, StopStatus, TrainCategory, TrainSummary};

use super::types::{RawTrain, RouteStop, SuggestResponse};
use super::{DEFAULT_PROVIDER, DEFAULT_SERVICE};

/// Placeholder for station names the upstream failed to provide.
pub const UNKNOWN_NAME: &str = "Н/Д";

/// Minutes before departure during which a stop counts as boarding.
const BOARDING_WINDOW_MINS: i64 = 20;

/// Filter suggest candidates down to real matches.
///
/// The upstream's own fuzzy matching sometimes returns loosely related
/// results, so we double-filter: keep a candidate only if its code is
/// numeric and the query is a case-insensitive substring of its name.
pub fn filter_station_matches(resp: &SuggestResponse, query: &str) -> Vec<StationMatch> {
    let needle = query.to_uppercase();

    resp.train
        .iter()
        .filter_map(|s| {
            let code: i64 = s.express_code.as_deref()?.trim().parse().ok()?;
            let name = s.name.to_uppercase();
            name.contains(&needle).then_some(StationMatch { name, code })
        })
        .collect()
}

/// Parse a wall-clock string as the upstream sends it: "HH:MM:SS",
/// falling back to "HH:MM".
pub fn parse_clock(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
}

/// Parse an ISO-8601 datetime, tolerating fractional seconds.
fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}

/// Reconstruct full timestamps for a raw stop sequence.
///
/// The upstream gives only time-of-day per stop. We track a running date,
/// starting at `now`'s date, and advance it by one day whenever a stop's
/// arrival time-of-day is strictly less than the previous stop's: that is
/// the only signal that the route crossed midnight. A departure that
/// precedes its own arrival gains one extra day (departure only), covering
/// a stop whose dwell itself spans midnight.
///
/// Stops missing either time keep `None` for that field and are tagged
/// [`StopStatus::Unknown`].
pub fn normalize_stops(
    raw: &[RouteStop],
    targets: &HashSet<i64>,
    now: NaiveDateTime,
) -> Vec<StopRecord> {
    let mut current_date = now.date();
    let mut prev_arrival: Option<NaiveTime> = None;
    let mut out = Vec::with_capacity(raw.len());

    for stop in raw {
        let arr_time = stop.arrival_time.as_deref().and_then(parse_clock);
        let dep_time = stop.departure_time.as_deref().and_then(parse_clock);

        // Rollover detection only keys off stops that carry an arrival.
        if let Some(arr) = arr_time {
            if prev_arrival.is_some_and(|prev| arr < prev) {
                current_date = current_date
                    .checked_add_days(Days::new(1))
                    .unwrap_or(current_date);
            }
            prev_arrival = Some(arr);
        }

        let arrival = arr_time.map(|t| current_date.and_time(t));
        let mut departure = dep_time.map(|t| current_date.and_time(t));

        if let (Some(a), Some(d)) = (arrival, departure)
            && d < a
        {
            departure = d.checked_add_days(Days::new(1));
        }

        let status = match (arrival, departure) {
            (Some(_), Some(dep)) => stop_status(dep, now),
            _ => StopStatus::Unknown,
        };

        out.push(StopRecord {
            name: stop.station_name.clone(),
            code: stop
                .station_code
                .map(|c| c.to_string())
                .unwrap_or_default(),
            arrival,
            departure,
            dwell_minutes: stop.stop_duration,
            is_target: stop.station_code.is_some_and(|c| targets.contains(&c)),
            status,
        });
    }

    out
}

fn stop_status(departure: NaiveDateTime, now: NaiveDateTime) -> StopStatus {
    if now > departure {
        return StopStatus::Departed;
    }
    let remaining = departure.signed_duration_since(now).num_minutes();
    if remaining <= BOARDING_WINDOW_MINS {
        StopStatus::Boarding
    } else {
        StopStatus::Scheduled
    }
}

/// Build a [`TrainSummary`] from a raw train entry.
///
/// Accepts either timestamp field-name variant; an entry whose timestamps
/// are missing or unparsable yields `None` and is dropped by the caller
/// (partial data beats total failure). The resulting `route` is the
/// upstream-provided fallback; the aggregator overwrites it when stop data
/// resolves.
pub fn summarize_train(raw: &RawTrain) -> Option<TrainSummary> {
    let number = raw.train_number.clone()?;

    let departure = raw
        .departure_date_time
        .as_deref()
        .or(raw.departure_time.as_deref())
        .and_then(parse_timestamp)?;
    let arrival = raw
        .arrival_date_time
        .as_deref()
        .or(raw.arrival_time.as_deref())
        .and_then(parse_timestamp)?;

    let category = if raw.category_id == Some(2) {
        TrainCategory::Express
    } else {
        TrainCategory::Regular
    };

    let train_type = raw
        .train_type
        .clone()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| {
            match category {
                TrainCategory::Express => "СКОРОСТНОЙ",
                TrainCategory::Regular => "ПРИГОРОДНЫЙ",
            }
            .to_string()
        });

    Some(TrainSummary {
        number,
        name: raw.train_name.clone().unwrap_or_default(),
        category,
        route: format!(
            "{} - {}",
            raw.origin_name.as_deref().unwrap_or(UNKNOWN_NAME),
            raw.destination_name.as_deref().unwrap_or(UNKNOWN_NAME)
        ),
        departure,
        arrival,
        train_type,
        train_class: raw.train_class_name.clone(),
        provider: raw
            .provider
            .clone()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_PROVIDER.to_string()),
        service: raw
            .service_provider
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SERVICE.to_string()),
    })
}
