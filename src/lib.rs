//! embedsmith scaffolds standardized embedded-firmware project layouts.
//! It renders a fixed set of templates against a small project configuration
//! (MCU, compiler, memory map, author metadata) and writes the result to disk.

/// Command-line interface module for the embedsmith application
pub mod cli;

/// Project configuration, defaults, and configuration file loading
/// Supports JSON with a YAML fallback
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the embedsmith application
pub mod error;

/// Generation orchestration: conflict check, planning, writing
pub mod generator;

/// Logger setup
pub mod logger;

/// Filesystem writes of a generation plan
pub mod materializer;

/// Static directory and file tables and plan construction
pub mod plan;

/// User input and interaction handling
pub mod prompt;

/// Safe `$`-placeholder substitution
pub mod renderer;

/// Template stores and template resolution
pub mod templates;
