//! RZD HTTP client.
//!
//! Thin async wrapper over the four upstream endpoints. One shared
//! connection pool, a fixed request timeout, and no retries: a timeout or
//! non-2xx response surfaces as an error here and the aggregation layer
//! decides how to degrade. Retrying at this level would mask upstream
//! rate limiting.

use chrono::NaiveDate;

use super::error::RzdError;
use super::types::{PricingResponse, RawTrain, SuggestResponse, TrainRouteResponse};
use super::{DEFAULT_SERVICE, TrainRouteQuery};

/// Default base URL for the RZD ticketing backend.
const DEFAULT_BASE_URL: &str = "https://ticket.rzd.ru";

/// Configuration for the RZD client.
#[derive(Debug, Clone)]
pub struct RzdConfig {
    /// Base URL for all four endpoints.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl RzdConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for RzdConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// RZD API client.
#[derive(Debug, Clone)]
pub struct RzdClient {
    http: reqwest::Client,
    base_url: String,
}

impl RzdClient {
    /// Create a new client with the given configuration.
    pub fn new(config: RzdConfig) -> Result<Self, RzdError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Search stations by (partial) name.
    pub async fn suggest_stations(&self, query: &str) -> Result<SuggestResponse, RzdError> {
        let url = format!("{}/api/v1/suggests", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("Query", query),
                ("TransportType", "rail"),
                ("GroupResults", "true"),
            ])
            .send()
            .await?;

        read_json(response).await
    }

    /// Fetch the stop list for one train.
    ///
    /// The endpoint requires a concrete `DepartureDate` even though the
    /// train's true departure date may differ; callers pass today. It also
    /// requires `Provider`/`serviceProvider`, which are not derivable from
    /// the train number alone (see the correlator in the gateway layer).
    pub async fn train_route(&self, query: &TrainRouteQuery<'_>) -> Result<TrainRouteResponse, RzdError> {
        let url = format!("{}/apib2b/p/Railway/V1/Search/TrainRoute", self.base_url);

        let departure_date = query
            .departure_date
            .format("%Y-%m-%dT00:00:00")
            .to_string();

        let response = self
            .http
            .get(&url)
            .query(&[
                ("TrainNumber", query.train_number),
                ("Origin", query.origin),
                ("Destination", query.destination),
                ("DepartureDate", departure_date.as_str()),
                ("Provider", query.provider),
                ("serviceProvider", query.service),
            ])
            .send()
            .await?;

        read_json(response).await
    }

    /// Fetch scheduled trains (with fares) between two station codes.
    pub async fn train_pricing(
        &self,
        origin: &str,
        destination: &str,
        date: NaiveDate,
    ) -> Result<PricingResponse, RzdError> {
        let url = format!(
            "{}/api/v1/railway-service/prices/train-pricing",
            self.base_url
        );

        let departure_date = date.format("%d.%m.%Y").to_string();

        let response = self
            .http
            .get(&url)
            .query(&[
                ("service_provider", DEFAULT_SERVICE),
                ("origin", origin),
                ("destination", destination),
                ("departureDate", departure_date.as_str()),
            ])
            .send()
            .await?;

        read_json(response).await
    }

    /// Fetch already-departed trains between two station codes.
    ///
    /// This is the one POST endpoint; the response is a bare JSON array.
    pub async fn departed_trains(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<RawTrain>, RzdError> {
        let url = format!("{}/api/v1/railway/departed", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({
                "departureExpressCode": origin,
                "arrivalExpressCode": destination,
            }))
            .send()
            .await?;

        read_json(response).await
    }
}

/// Check status and decode the body, keeping a truncated copy of the raw
/// text around for JSON errors (the upstream likes to answer with HTML).
async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, RzdError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(RzdError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    let body = response.text().await?;

    serde_json::from_str(&body).map_err(|e| RzdError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(500).collect()),
    })
}
