//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum REST endpoints
//! - `memory` - In-memory survey store (development and tests)

pub mod http;
pub mod memory;

pub use http::{analytics_routes, AnalyticsAppState};
pub use memory::{InMemorySurveyStore, SeedError};
