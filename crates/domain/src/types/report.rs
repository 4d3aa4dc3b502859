//! Run report types
//!
//! The externally surfaced outcome of a run is always the fixed completion
//! text; callers embedding the driver inspect the report instead.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cursor::SyncCursor;
use crate::constants::COMPLETION_TEXT;

/// Phase classification for run failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncPhase {
    CursorRead,
    Query,
    Mapping,
    Commit,
}

/// Outcome classification for one sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// Page walk and commit writes all finished cleanly.
    Completed,
    /// Page walk finished; one or more commit writes failed.
    CompletedWithCommitErrors,
    /// Page walk aborted before a cursor could be computed. Nothing was
    /// committed and the previously stored cursor is untouched.
    WalkFailed,
}

/// Fatal walk failure carried in the run report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkFailure {
    pub phase: SyncPhase,
    pub message: String,
}

/// Machine-readable summary of one sync run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub status: RunStatus,
    /// Rows appended to the export artifact.
    pub rows_exported: u64,
    /// Feed requests issued during the walk.
    pub requests: u32,
    /// Cursor persisted for the next run. `None` when the walk failed.
    pub new_cursor: Option<SyncCursor>,
    /// True when the walk resumed from a previously stored cursor.
    pub resumed: bool,
    /// True when reading the prior cursor failed and the run degraded to
    /// full-window mode.
    pub cursor_read_failed: bool,
    pub walk_failure: Option<WalkFailure>,
    pub commit_errors: Vec<String>,
    /// Object key of the uploaded artifact, when the upload succeeded.
    pub artifact_key: Option<String>,
    pub elapsed_ms: u64,
}

impl RunReport {
    /// Completion text reported to the caller regardless of status.
    pub fn completion_text(&self) -> &'static str {
        COMPLETION_TEXT
    }
}
