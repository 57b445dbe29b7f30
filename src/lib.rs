//! hirescreen: an end-to-end applicant screening classifier.
//!
//! This crate generates synthetic labeled applicant data from a fixed
//! ground-truth rule, standardizes the two features, trains a linear-margin
//! binary classifier, and serves per-applicant predictions with a bounded
//! confidence score derived from the decision-value magnitude.
//!
//! The design favors small, testable modules: fitted states are immutable
//! values produced once at startup and threaded explicitly into inference,
//! and every failure is an explicit error kind rather than a panic.
pub mod config;
pub mod data_handling;
pub mod error;
pub mod inference;
pub mod models;
pub mod pipeline;
pub mod preprocessing;
pub mod report;
pub mod schema;
pub mod stats;
