//! Analytics HTTP adapter module.
//!
//! Provides REST API endpoints for survey feedback analytics.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::AnalyticsAppState;
pub use routes::analytics_routes;
