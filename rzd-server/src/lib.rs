//! Normalized query gateway over the RZD ticketing backend.
//!
//! Reconciles four loosely-typed upstream endpoints (station suggest,
//! train pricing, departed trains, train route) into one consistent,
//! time-aware API: station lookup, train listing between two stations,
//! and per-train stop schedules.

pub mod cache;
pub mod domain;
pub mod gateway;
pub mod rzd;
pub mod web;
