//! # Deltafeed Domain
//!
//! Business domain types and models for deltafeed.
//!
//! This crate contains:
//! - Export row and raw change-feed record types
//! - Domain error types and Result definitions
//! - Run configuration structures
//! - Domain constants and the run report model
//!
//! ## Architecture
//! - No dependencies on other deltafeed crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
