//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `survey` - Questions, responses and answers as read from storage
//! - `analytics` - Pure aggregation services producing feedback reports

pub mod analytics;
pub mod foundation;
pub mod survey;
