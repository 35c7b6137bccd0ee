//! Adapter implementations for snapshot persistence and export.

pub mod export;
pub mod json_file;
pub mod memory;
