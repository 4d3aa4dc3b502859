//! Sync cursor

use serde::{Deserialize, Serialize};

/// Opaque resume token scoped to one sync relationship.
///
/// An empty cursor is meaningful: it is what a run persists when the feed
/// finished without issuing a new token, and it sends the next run back to
/// full-window mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncCursor(String);

impl SyncCursor {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SyncCursor {
    fn from(value: String) -> Self {
        Self(value)
    }
}
