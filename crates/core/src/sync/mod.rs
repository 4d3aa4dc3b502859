//! Delta sync orchestration
//!
//! The driver walks the paginated change feed, streams rows into the export
//! sink, and commits the new cursor once the walk finishes cleanly.

pub mod driver;
pub mod errors;
pub mod mapper;
pub mod ports;
