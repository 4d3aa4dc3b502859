//! # Deltafeed App
//!
//! Binary wiring layer - configuration, telemetry and the run entry point.
//!
//! This crate contains:
//! - Application context (dependency injection)
//! - Telemetry initialization
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Owns the process entry point

pub mod context;
pub mod telemetry;

// Re-export for convenience
pub use context::AppContext;
