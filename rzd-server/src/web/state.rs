//! Application state for the web layer.

use std::sync::Arc;

use crate::gateway::Gateway;
use crate::rzd::RzdClient;

/// Shared application state: the gateway over the live RZD client.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<Gateway<RzdClient>>,
}

impl AppState {
    pub fn new(gateway: Gateway<RzdClient>) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }
}
