//! # Deltafeed Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP change-feed client and token acquisition
//! - Object-store backed cursor and artifact storage
//! - Pipe-delimited CSV export sink
//! - Configuration loading (environment and file based)
//!
//! ## Architecture
//! - Implements traits defined in `deltafeed-core`
//! - Depends on `deltafeed-domain` and `deltafeed-core`
//! - Contains all "impure" code (I/O, network, filesystem)

pub mod config;
pub mod errors;
pub mod export;
pub mod feed;
pub mod store;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use export::*;
pub use feed::*;
pub use store::*;
