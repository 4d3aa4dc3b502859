//! Durable storage adapters
//!
//! Object-store backed persistence for the sync cursor, run audit and
//! export artifacts.

pub mod object;

// Re-export commonly used items
pub use object::ObjectCursorStore;
