//! Data transfer objects for web requests and responses.
//!
//! Wire field names (`ts_dep`, `ts_arr`, `stop_min`, `is_target`) are the
//! ones this API has always served; existing consumers depend on them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{StationMatch, StopRecord, TrainSummary};

/// Query for `GET /stations`.
#[derive(Debug, Deserialize)]
pub struct StationsQuery {
    /// Partial station name.
    pub part: String,
}

/// Response for `GET /stations`.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationEntry>,
}

/// One matched station.
#[derive(Debug, Serialize)]
pub struct StationEntry {
    pub station: String,
    pub code: i64,
}

impl From<&StationMatch> for StationEntry {
    fn from(m: &StationMatch) -> Self {
        Self {
            station: m.name.clone(),
            code: m.code,
        }
    }
}

/// Query for `GET /routes`.
#[derive(Debug, Deserialize)]
pub struct RoutesQuery {
    pub code_from: String,
    pub code_to: String,
}

/// Response for `GET /routes`.
///
/// An empty train list is reported as a still-200 `Not Found` payload,
/// not an HTTP error; callers always get something parseable.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RoutesResponse {
    Found {
        info: RouteInfoDto,
        trains: Vec<TrainDto>,
    },
    NotFound {
        status: &'static str,
        trains: Vec<TrainDto>,
    },
}

#[derive(Debug, Serialize)]
pub struct RouteInfoDto {
    pub origin: String,
    pub destination: String,
}

/// One train on the board.
#[derive(Debug, Serialize)]
pub struct TrainDto {
    pub number: String,
    pub name: String,
    pub category: &'static str,
    pub route: String,
    pub ts_dep: String,
    pub ts_arr: String,
    pub train_type: String,
    pub train_class: Option<String>,
    pub provider: String,
    pub service: String,
}

impl From<&TrainSummary> for TrainDto {
    fn from(t: &TrainSummary) -> Self {
        Self {
            number: t.number.clone(),
            name: t.name.clone(),
            category: t.category.as_str(),
            route: t.route.clone(),
            ts_dep: fmt_ts(t.departure),
            ts_arr: fmt_ts(t.arrival),
            train_type: t.train_type.clone(),
            train_class: t.train_class.clone(),
            provider: t.provider.clone(),
            service: t.service.clone(),
        }
    }
}

/// Query for `GET /station_list`. Takes station *names*, resolved to
/// codes internally.
#[derive(Debug, Deserialize)]
pub struct StationListQuery {
    pub train_num: String,
    pub str_from: String,
    pub str_to: String,
}

/// Response for `GET /station_list`.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    pub train: String,
    pub stops: Vec<StopDto>,
}

/// One stop on the train's route.
#[derive(Debug, Serialize)]
pub struct StopDto {
    pub name: String,
    pub code: String,
    pub ts_arr: Option<String>,
    pub ts_dep: Option<String>,
    pub stop_min: Option<i64>,
    pub is_target: bool,
    pub status: &'static str,
}

impl From<&StopRecord> for StopDto {
    fn from(s: &StopRecord) -> Self {
        Self {
            name: s.name.clone(),
            code: s.code.clone(),
            ts_arr: s.arrival.map(fmt_ts),
            ts_dep: s.departure.map(fmt_ts),
            stop_min: s.dwell_minutes,
            is_target: s.is_target,
            status: s.status.as_str(),
        }
    }
}

fn fmt_ts(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StopStatus, TrainCategory};
    use chrono::NaiveDate;

    fn ts(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 10, 27)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn not_found_payload_shape() {
        let resp = RoutesResponse::NotFound {
            status: "Not Found",
            trains: vec![],
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "Not Found", "trains": []})
        );
    }

    #[test]
    fn train_dto_serializes_wire_field_names() {
        let train = TrainSummary {
            number: "054Ч".to_string(),
            name: String::new(),
            category: TrainCategory::Express,
            route: "МОСКВА - СПБ".to_string(),
            departure: ts(23, 30),
            arrival: ts(8, 15),
            train_type: "СКОРОСТНОЙ".to_string(),
            train_class: None,
            provider: "P1".to_string(),
            service: "B2B_RZD".to_string(),
        };

        let json = serde_json::to_value(TrainDto::from(&train)).unwrap();
        assert_eq!(json["number"], "054Ч");
        assert_eq!(json["category"], "EXPRESS");
        assert_eq!(json["ts_dep"], "2023-10-27T23:30:00");
        assert_eq!(json["train_class"], serde_json::Value::Null);
    }

    #[test]
    fn stop_dto_preserves_unknown_dwell() {
        let stop = StopRecord {
            name: "ТВЕРЬ".to_string(),
            code: "2004600".to_string(),
            arrival: Some(ts(1, 15)),
            departure: None,
            dwell_minutes: None,
            is_target: true,
            status: StopStatus::Unknown,
        };

        let json = serde_json::to_value(StopDto::from(&stop)).unwrap();
        assert_eq!(json["ts_arr"], "2023-10-27T01:15:00");
        assert_eq!(json["ts_dep"], serde_json::Value::Null);
        // Unknown dwell stays null, never coerced to 0
        assert_eq!(json["stop_min"], serde_json::Value::Null);
        assert_eq!(json["status"], "UNK");
        assert_eq!(json["is_target"], true);
    }
}
