//! Port interfaces for delta sync operations

use async_trait::async_trait;
use deltafeed_domain::{Appointment, RawChangeRecord, Result};

/// Parameters for one change-feed request.
///
/// The first request of a walk is `Window` or `Resume`; every follow-up is
/// `Continue` and carries nothing but the page token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequest {
    /// Explicit bounds, used when no cursor could be resumed.
    Window { start: String, end: String },
    /// Resume from the cursor persisted by a previous run.
    Resume { delta_token: String },
    /// Follow-up request inside a walk.
    Continue { page_token: String },
}

/// One page of the change feed.
///
/// Continuation markers arrive already isolated from their raw links. At
/// most one of them is honored per page: a delta token always terminates
/// the walk, even when a page token rides along.
#[derive(Debug, Clone, Default)]
pub struct ChangePage {
    pub records: Vec<RawChangeRecord>,
    pub next_page_token: Option<String>,
    pub delta_token: Option<String>,
}

/// Trait for querying the remote change feed
#[async_trait]
pub trait ChangeSource: Send + Sync {
    /// Fetch a single page. One attempt per call; retry policy is not part
    /// of this contract.
    async fn fetch_page(&self, request: &PageRequest) -> Result<ChangePage>;
}

/// Trait for the durable blob store holding cursor, audit trail and artifacts
#[async_trait]
pub trait CursorStore: Send + Sync {
    /// Read a blob. Returns `None` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Write a blob with the given content type.
    async fn put(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<()>;
}

/// Append-only row writer producing one run's export artifact.
pub trait ExportSink: Send {
    /// Append rows in the given order.
    fn append_rows(&mut self, rows: &[Appointment]) -> Result<()>;

    /// Flush and release the writer, returning the finalized artifact bytes.
    fn finish(self: Box<Self>) -> Result<Vec<u8>>;
}

/// Opens one export sink per run.
pub trait ExportSinkFactory: Send + Sync {
    /// Open a fresh sink for the named artifact.
    fn open(&self, file_name: &str) -> Result<Box<dyn ExportSink>>;
}
