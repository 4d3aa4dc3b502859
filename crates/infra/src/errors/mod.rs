//! Infrastructure error conversions
//!
//! This module keeps the mapping from external library errors into the
//! domain error taxonomy in one place.

pub mod conversions;

// Re-export commonly used items
pub use conversions::InfraError;
