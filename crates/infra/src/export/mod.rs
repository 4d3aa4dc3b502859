//! Export sinks
//!
//! File-backed sinks that render appointment rows into the pipe-delimited
//! export format.

pub mod csv_sink;

// Re-export commonly used items
pub use csv_sink::SpoolSinkFactory;
