//! Change feed integration
//!
//! HTTP adapter for the calendar delta feed: token acquisition, page
//! requests, and continuation-link parsing.

pub mod client;
pub mod continuation;
pub mod token;

// Re-export commonly used items
pub use client::GraphChangeFeed;
pub use token::{RopcTokenProvider, TokenProvider};
