//! # Deltafeed Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for the change feed, cursor store
//!   and export sink
//! - The delta sync driver and record mapper
//!
//! ## Architecture Principles
//! - Only depends on `deltafeed-domain`
//! - No HTTP, storage, or filesystem code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod sync;

// Re-export specific items to avoid ambiguity
pub use sync::driver::DeltaSyncDriver;
pub use sync::errors::SyncError;
pub use sync::mapper::map_record;
pub use sync::ports::{
    ChangePage, ChangeSource, CursorStore, ExportSink, ExportSinkFactory, PageRequest,
};
