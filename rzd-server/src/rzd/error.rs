//! RZD client error types.

/// Errors from the RZD HTTP client.
///
/// The client never swallows failures; the aggregation layer decides
/// how each one degrades (empty list, fallback string, and so on).
#[derive(Debug, thiserror::Error)]
pub enum RzdError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream returned a non-2xx status code
    #[error("upstream error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the JSON shape we expected
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },
}
