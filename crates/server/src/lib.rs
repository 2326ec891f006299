//! HTTP server for the conditional gathering rules service.
//!
//! Loads the rule set once at startup through `gathering-rules` and
//! exposes it over a single read-only endpoint.

pub mod api;
pub mod config;
pub mod error;
