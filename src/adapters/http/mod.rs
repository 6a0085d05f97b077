//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod analytics;

// Re-export key types for convenience
pub use analytics::analytics_routes;
pub use analytics::AnalyticsAppState;
