//! Station lookup results.

/// A station matched against a name query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationMatch {
    /// Station name, upper-cased.
    pub name: String,

    /// Canonical numeric station code used by every other endpoint.
    pub code: i64,
}
