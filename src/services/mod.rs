//! Service layer: lifecycle transitions, metrics, queries, and tracking.

pub mod lifecycle;
pub mod metrics;
pub mod query;
pub mod tracker;
