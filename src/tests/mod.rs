//! Unit tests for the tasktimer crate.
//!
//! Tests are organised by layer, covering happy paths, error cases, and
//! edge cases for all public APIs.

mod domain_tests;
mod metrics_tests;
mod support;
