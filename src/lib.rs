//! Tasktimer: personal task/time-tracking core.
//!
//! This crate provides the task lifecycle and derived-metrics model behind a
//! personal task timer: validated task records, a status state machine,
//! duration and efficiency derivation, filtering over the task collection,
//! snapshot persistence, and export serialisation.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (snapshot files, exports)
//! - **Services**: Lifecycle, metrics, query, and tracking orchestration
//!
//! # Modules
//!
//! - [`domain`]: Task records, status state machine, and drafts
//! - [`services`]: Collection transitions, metrics, queries, and the tracker
//! - [`ports`]: Snapshot persistence contract
//! - [`adapters`]: In-memory and JSON-file snapshot stores plus exporters

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
