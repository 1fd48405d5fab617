//! Mock RZD client for testing without network access.
//!
//! Serves canned per-endpoint responses; an endpoint with nothing canned
//! answers with an upstream error, which is how tests simulate partial
//! upstream failure. Call counters let cache tests assert how many
//! upstream requests actually happened.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::NaiveDate;

use crate::gateway::RzdApi;

use super::error::RzdError;
use super::types::{PricingResponse, RawTrain, SuggestResponse, TrainRouteResponse};
use super::TrainRouteQuery;

/// Per-endpoint upstream call counters.
#[derive(Debug, Default)]
pub struct MockCalls {
    pub suggest: AtomicUsize,
    pub route: AtomicUsize,
    pub pricing: AtomicUsize,
    pub departed: AtomicUsize,
}

/// Canned-response RZD client.
#[derive(Default)]
pub struct MockRzd {
    suggests: HashMap<String, SuggestResponse>,
    routes: HashMap<String, TrainRouteResponse>,
    pricing: Option<PricingResponse>,
    departed: Option<Vec<RawTrain>>,
    calls: Arc<MockCalls>,
}

impl MockRzd {
    pub fn new() -> Self {
        Self::default()
    }

    /// Can a suggest response for the given query.
    pub fn with_suggest(mut self, query: impl Into<String>, resp: SuggestResponse) -> Self {
        self.suggests.insert(query.into(), resp);
        self
    }

    /// Can a route response for the given train number.
    pub fn with_route(mut self, train_number: impl Into<String>, resp: TrainRouteResponse) -> Self {
        self.routes.insert(train_number.into(), resp);
        self
    }

    /// Can the pricing response.
    pub fn with_pricing(mut self, resp: PricingResponse) -> Self {
        self.pricing = Some(resp);
        self
    }

    /// Can the departed-trains response.
    pub fn with_departed(mut self, trains: Vec<RawTrain>) -> Self {
        self.departed = Some(trains);
        self
    }

    /// Handle on the call counters, kept valid after the mock moves into
    /// a gateway.
    pub fn calls(&self) -> Arc<MockCalls> {
        self.calls.clone()
    }
}

fn not_canned(what: &str) -> RzdError {
    RzdError::Api {
        status: 503,
        message: format!("mock: no canned {what} response"),
    }
}

impl RzdApi for MockRzd {
    async fn suggest_stations(&self, query: &str) -> Result<SuggestResponse, RzdError> {
        self.calls.suggest.fetch_add(1, Ordering::SeqCst);
        self.suggests
            .get(query)
            .cloned()
            .ok_or_else(|| not_canned("suggest"))
    }

    async fn train_route(
        &self,
        query: &TrainRouteQuery<'_>,
    ) -> Result<TrainRouteResponse, RzdError> {
        self.calls.route.fetch_add(1, Ordering::SeqCst);
        self.routes
            .get(query.train_number)
            .cloned()
            .ok_or_else(|| not_canned("route"))
    }

    async fn train_pricing(
        &self,
        _origin: &str,
        _destination: &str,
        _date: NaiveDate,
    ) -> Result<PricingResponse, RzdError> {
        self.calls.pricing.fetch_add(1, Ordering::SeqCst);
        self.pricing.clone().ok_or_else(|| not_canned("pricing"))
    }

    async fn departed_trains(
        &self,
        _origin: &str,
        _destination: &str,
    ) -> Result<Vec<RawTrain>, RzdError> {
        self.calls.departed.fetch_add(1, Ordering::SeqCst);
        self.departed.clone().ok_or_else(|| not_canned("departed"))
    }
}
