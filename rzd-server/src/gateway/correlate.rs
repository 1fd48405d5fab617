//! Provider/service correlator.
//!
//! The stops endpoint demands `Provider`/`serviceProvider` parameters that
//! a train-number-only query does not carry. This correlator bridges the
//! two upstream parameter spaces by re-querying the (cached) route
//! aggregator for the station pair and scanning for the train.

use super::{Gateway, RzdApi};

impl<C: RzdApi> Gateway<C> {
    /// Locate the `(provider, service)` tuple for a train between two
    /// station codes.
    ///
    /// Returns `None` when the train is not on the aggregated board;
    /// callers substitute the upstream defaults.
    pub async fn find_provider_service(
        &self,
        train_number: &str,
        origin_code: &str,
        dest_code: &str,
    ) -> Option<(String, String)> {
        let board = self.list_trains(origin_code, dest_code).await;

        board
            .trains
            .iter()
            .find(|t| t.number == train_number)
            .map(|t| (t.provider.clone(), t.service.clone()))
    }
}
