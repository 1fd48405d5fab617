//! Web layer.
//!
//! JSON-over-HTTP endpoints for station lookup, train listings, and
//! per-train stop schedules. Every handler answers 200 with a parseable
//! payload; "no data" and "upstream failure" deliberately look the same
//! to callers.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
