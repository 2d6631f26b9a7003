//! Configuration and logging shared across the plural crates.
//!
//! - **Configuration**: Strongly typed, validated settings loaded from YAML (`config`).
//! - **Logging**: `tracing` subscriber setup (`logging`).
pub mod config;
pub mod logging;
