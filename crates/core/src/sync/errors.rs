//! Walk failure classification

use deltafeed_domain::SyncPhase;
use thiserror::Error;

/// Fatal error raised while walking the change feed.
///
/// Only query and mapping failures abort a walk. Cursor-read and commit
/// failures are non-fatal and surface as flags on the run report instead.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("change feed query failed: {0}")]
    Query(String),

    #[error("record mapping or export failed: {0}")]
    Mapping(String),
}

impl SyncError {
    /// Phase classification carried into the run report.
    pub fn phase(&self) -> SyncPhase {
        match self {
            Self::Query(_) => SyncPhase::Query,
            Self::Mapping(_) => SyncPhase::Mapping,
        }
    }

    /// Failure message without the phase prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Query(msg) | Self::Mapping(msg) => msg,
        }
    }
}
