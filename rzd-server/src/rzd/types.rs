//! RZD API response DTOs.
//!
//! These types map directly to the upstream JSON. The upstream has no
//! published contract, so every field that has ever been observed missing
//! is an `Option`, and the two timestamp field-name variants the backend
//! alternates between are both declared here. All variant resolution
//! happens in [`convert`](super::convert), not at call sites.

use serde::Deserialize;

/// Response from the station suggest endpoint (`/api/v1/suggests`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuggestResponse {
    /// Rail station candidates. Absent when nothing matched.
    #[serde(default)]
    pub train: Vec<SuggestStation>,
}

/// One suggest candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestStation {
    /// Station name as the upstream spells it.
    #[serde(default)]
    pub name: String,

    /// Canonical numeric station code, as a string. Sometimes empty,
    /// sometimes missing, occasionally not numeric at all.
    pub express_code: Option<String>,
}

/// Response from the train route endpoint (`TrainRoute`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrainRouteResponse {
    /// Route variants; in practice the first entry is the one that matters.
    #[serde(rename = "Routes", default)]
    pub routes: Vec<RouteVariant>,
}

/// A single route variant with its ordered stop list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteVariant {
    /// Stops in physical route order.
    #[serde(rename = "RouteStops", default)]
    pub route_stops: Vec<RouteStop>,
}

/// A raw stop record. Times are wall-clock only; the upstream does not
/// say which calendar date a stop falls on.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteStop {
    #[serde(rename = "StationName", default)]
    pub station_name: String,

    /// Numeric station code.
    #[serde(rename = "StationCode")]
    pub station_code: Option<i64>,

    /// "HH:MM:SS" or "HH:MM", no date.
    #[serde(rename = "ArrivalTime")]
    pub arrival_time: Option<String>,

    /// "HH:MM:SS" or "HH:MM", no date.
    #[serde(rename = "DepartureTime")]
    pub departure_time: Option<String>,

    /// Dwell time in minutes. Absent means unknown, not zero.
    #[serde(rename = "StopDuration")]
    pub stop_duration: Option<i64>,
}

/// Response from the train pricing endpoint (`train-pricing`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PricingResponse {
    #[serde(rename = "OriginStationName")]
    pub origin_station_name: Option<String>,

    #[serde(rename = "DestinationStationName")]
    pub destination_station_name: Option<String>,

    #[serde(rename = "Trains", default)]
    pub trains: Vec<RawTrain>,
}

/// A raw train entry, shared by the pricing and departed-trains endpoints.
///
/// The two endpoints disagree on timestamp field names: pricing sends
/// `DepartureDateTime`/`ArrivalDateTime`, departed-trains sends
/// `DepartureTime`/`ArrivalTime`. Both carry full ISO-8601 datetimes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTrain {
    #[serde(rename = "TrainNumber")]
    pub train_number: Option<String>,

    #[serde(rename = "TrainName")]
    pub train_name: Option<String>,

    /// Category code; `2` means express.
    #[serde(rename = "CategoryId")]
    pub category_id: Option<i64>,

    /// Human-readable train type. Often blank.
    #[serde(rename = "TrainType")]
    pub train_type: Option<String>,

    #[serde(rename = "TrainClassName")]
    pub train_class_name: Option<String>,

    #[serde(rename = "DepartureDateTime")]
    pub departure_date_time: Option<String>,

    #[serde(rename = "DepartureTime")]
    pub departure_time: Option<String>,

    #[serde(rename = "ArrivalDateTime")]
    pub arrival_date_time: Option<String>,

    #[serde(rename = "ArrivalTime")]
    pub arrival_time: Option<String>,

    #[serde(rename = "OriginName")]
    pub origin_name: Option<String>,

    #[serde(rename = "DestinationName")]
    pub destination_name: Option<String>,

    /// Routing parameter required by the stops endpoint.
    #[serde(rename = "Provider")]
    pub provider: Option<String>,

    /// Routing parameter required by the stops endpoint.
    #[serde(rename = "ServiceProvider")]
    pub service_provider: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_suggest_response() {
        let json = r#"{
            "train": [
                {"name": "МОСКВА ОКТ", "expressCode": "2006004"},
                {"name": "МОСКВА КАЗ", "expressCode": "2000003"},
                {"name": "МОСКОВСКИЙ ПР."}
            ]
        }"#;

        let resp: SuggestResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.train.len(), 3);
        assert_eq!(resp.train[0].name, "МОСКВА ОКТ");
        assert_eq!(resp.train[0].express_code.as_deref(), Some("2006004"));
        assert!(resp.train[2].express_code.is_none());
    }

    #[test]
    fn deserialize_suggest_response_without_train_key() {
        let resp: SuggestResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.train.is_empty());
    }

    #[test]
    fn deserialize_train_route() {
        let json = r#"{
            "Routes": [
                {
                    "RouteStops": [
                        {
                            "StationName": "ТВЕРЬ",
                            "StationCode": 2004600,
                            "ArrivalTime": "01:15:00",
                            "DepartureTime": "01:16:00",
                            "StopDuration": 1
                        },
                        {
                            "StationName": "БОЛОГОЕ",
                            "StationCode": 2004200,
                            "ArrivalTime": "02:40"
                        }
                    ]
                }
            ]
        }"#;

        let resp: TrainRouteResponse = serde_json::from_str(json).unwrap();
        let stops = &resp.routes[0].route_stops;
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].station_code, Some(2004600));
        assert_eq!(stops[0].stop_duration, Some(1));
        assert!(stops[1].departure_time.is_none());
        assert!(stops[1].stop_duration.is_none());
    }

    #[test]
    fn deserialize_raw_train_both_timestamp_variants() {
        // Pricing shape
        let json = r#"{
            "TrainNumber": "054Ч",
            "CategoryId": 2,
            "DepartureDateTime": "2023-10-27T23:30:00",
            "ArrivalDateTime": "2023-10-28T08:15:00",
            "OriginName": "МОСКВА",
            "DestinationName": "СПБ",
            "Provider": "P13",
            "ServiceProvider": "B2B_RZD"
        }"#;
        let train: RawTrain = serde_json::from_str(json).unwrap();
        assert_eq!(train.train_number.as_deref(), Some("054Ч"));
        assert_eq!(
            train.departure_date_time.as_deref(),
            Some("2023-10-27T23:30:00")
        );
        assert!(train.departure_time.is_none());

        // Departed-trains shape
        let json = r#"{
            "TrainNumber": "716А",
            "DepartureTime": "2023-10-27T06:45:00",
            "ArrivalTime": "2023-10-27T10:30:00"
        }"#;
        let train: RawTrain = serde_json::from_str(json).unwrap();
        assert!(train.departure_date_time.is_none());
        assert_eq!(train.departure_time.as_deref(), Some("2023-10-27T06:45:00"));
        assert!(train.category_id.is_none());
    }
}
