//! # Particles IO
//!
//! JSON text layer for the particle simulation.
//!
//! This crate provides:
//! - Structured error handling with custom error types
//! - JSON serialization helpers and file read/write
//! - The settings payload codec used by every host

/// Error types and result aliases for I/O operations
pub mod error;
/// Validated serialization helpers for JSON
pub mod serialization;
/// Settings payload parsing and export
pub mod settings;

pub use error::{IoError, Result};
pub use serialization::{from_json, read_json_file, to_json, to_json_pretty, write_json_file};
pub use settings::{parse_settings, read_settings_file, settings_to_json, write_settings_file};
