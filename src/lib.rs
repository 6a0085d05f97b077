//! Feedback Analytics - Survey response aggregation engine
//!
//! Turns a survey's questions, responses and answers into per-question
//! statistics, optionally restricted to a recent time window and annotated
//! with a respondent cohort breakdown.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
