//! Delta sync driver
//!
//! Orchestrates one run end to end: resolve the prior cursor, walk the
//! paginated change feed while streaming rows into the export sink, then
//! commit the new cursor, its audit copy and the artifact. The walk holds
//! one page in memory at a time.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use deltafeed_domain::constants::{
    ARTIFACT_CONTENT_TYPE, ARTIFACT_STAMP_FORMAT, CURSOR_CONTENT_TYPE,
};
use deltafeed_domain::{
    AppConfig, Appointment, RunReport, RunStatus, SyncCursor, WalkFailure,
};
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use super::errors::SyncError;
use super::mapper::map_record;
use super::ports::{
    ChangePage, ChangeSource, CursorStore, ExportSink, ExportSinkFactory, PageRequest,
};

/// Drives one delta-sync run.
pub struct DeltaSyncDriver {
    source: Arc<dyn ChangeSource>,
    store: Arc<dyn CursorStore>,
    sinks: Arc<dyn ExportSinkFactory>,
    config: AppConfig,
}

/// Prior cursor resolved at run start.
struct ResolvedCursor {
    token: Option<String>,
    read_failed: bool,
}

impl DeltaSyncDriver {
    /// Create a new driver over the given ports.
    pub fn new(
        source: Arc<dyn ChangeSource>,
        store: Arc<dyn CursorStore>,
        sinks: Arc<dyn ExportSinkFactory>,
        config: AppConfig,
    ) -> Self {
        Self { source, store, sinks, config }
    }

    /// Run one sync end to end.
    ///
    /// Never returns an error: walk failures are folded into the report,
    /// nothing is committed for them, and the previously stored cursor is
    /// left untouched for the next run.
    #[instrument(skip(self), fields(run_id = tracing::field::Empty))]
    pub async fn run(&self) -> RunReport {
        let run_id = Uuid::new_v4();
        tracing::Span::current().record("run_id", tracing::field::display(run_id));
        let started = Instant::now();
        info!("sync run starting");

        let stamp = Utc::now().format(ARTIFACT_STAMP_FORMAT).to_string();
        let artifact_name = format!("Appointments_{stamp}.csv");
        let audit_name = format!("delta_{stamp}.txt");

        let resolved = self.resolve_cursor().await;

        let mut report = RunReport {
            run_id,
            status: RunStatus::Completed,
            rows_exported: 0,
            requests: 0,
            new_cursor: None,
            resumed: resolved.token.is_some(),
            cursor_read_failed: resolved.read_failed,
            walk_failure: None,
            commit_errors: Vec::new(),
            artifact_key: None,
            elapsed_ms: 0,
        };

        match self.export_walk(&artifact_name, resolved.token.as_deref(), &mut report).await {
            Ok((cursor, artifact)) => {
                info!(
                    rows = report.rows_exported,
                    requests = report.requests,
                    cursor_empty = cursor.is_empty(),
                    "page walk complete"
                );
                report.new_cursor = Some(cursor.clone());
                self.commit(&cursor, &audit_name, &artifact_name, artifact, &mut report).await;
                report.status = if report.commit_errors.is_empty() {
                    RunStatus::Completed
                } else {
                    RunStatus::CompletedWithCommitErrors
                };
            }
            Err(failure) => {
                error!(
                    phase = ?failure.phase(),
                    error = %failure,
                    "page walk failed; previous cursor left in place"
                );
                report.status = RunStatus::WalkFailed;
                report.walk_failure = Some(WalkFailure {
                    phase: failure.phase(),
                    message: failure.message().to_string(),
                });
            }
        }

        report.elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        info!(
            status = ?report.status,
            rows = report.rows_exported,
            elapsed_ms = report.elapsed_ms,
            "sync run finished"
        );
        report
    }

    /// Read the prior cursor by its well-known key.
    ///
    /// Every failure mode here is non-fatal; the run degrades to full-window
    /// mode and says so in the report.
    async fn resolve_cursor(&self) -> ResolvedCursor {
        let key = self.object_key(&self.config.cursor_key);
        match self.store.get(&key).await {
            Ok(Some(bytes)) => {
                let text = String::from_utf8_lossy(&bytes);
                let token = text.lines().next().unwrap_or("").trim().to_string();
                if token.is_empty() {
                    info!("stored cursor is empty; fetching full window");
                    ResolvedCursor { token: None, read_failed: false }
                } else {
                    info!("resuming from stored cursor");
                    ResolvedCursor { token: Some(token), read_failed: false }
                }
            }
            Ok(None) => {
                info!(key = %key, "no stored cursor; fetching full window");
                ResolvedCursor { token: None, read_failed: false }
            }
            Err(err) => {
                warn!(key = %key, error = %err, "cursor read failed; fetching full window");
                ResolvedCursor { token: None, read_failed: true }
            }
        }
    }

    /// Open the sink, walk the feed into it, and finalize it.
    ///
    /// The sink is finalized on every path, including walk failure, so a
    /// partially written spool file is never left open.
    async fn export_walk(
        &self,
        artifact_name: &str,
        resume_token: Option<&str>,
        report: &mut RunReport,
    ) -> Result<(SyncCursor, Vec<u8>), SyncError> {
        let mut sink = self
            .sinks
            .open(artifact_name)
            .map_err(|e| SyncError::Mapping(format!("opening export sink: {e}")))?;

        let walked = self.walk(resume_token, sink.as_mut(), report).await;
        let finished = sink.finish();

        let cursor = walked?;
        let artifact =
            finished.map_err(|e| SyncError::Mapping(format!("finalizing export sink: {e}")))?;
        Ok((cursor, artifact))
    }

    /// Walk the paginated feed, appending each page before requesting the
    /// next one.
    async fn walk(
        &self,
        resume_token: Option<&str>,
        sink: &mut dyn ExportSink,
        report: &mut RunReport,
    ) -> Result<SyncCursor, SyncError> {
        let mut request = match resume_token {
            Some(token) => {
                debug!("processing delta changes");
                PageRequest::Resume { delta_token: token.to_string() }
            }
            None => {
                debug!("processing full window");
                PageRequest::Window {
                    start: self.config.window.start.clone(),
                    end: self.config.window.end.clone(),
                }
            }
        };

        loop {
            let ChangePage { records, next_page_token, delta_token } = self
                .source
                .fetch_page(&request)
                .await
                .map_err(|e| SyncError::Query(e.to_string()))?;
            report.requests += 1;

            let rows: Vec<Appointment> = records.into_iter().map(map_record).collect();
            sink.append_rows(&rows).map_err(|e| SyncError::Mapping(e.to_string()))?;
            report.rows_exported += rows.len() as u64;

            debug!(
                rows = rows.len(),
                has_next = next_page_token.is_some(),
                has_delta = delta_token.is_some(),
                "page appended"
            );

            // A delta token ends the walk even when a page token rides along.
            if let Some(delta) = delta_token {
                return Ok(SyncCursor::new(delta));
            }
            match next_page_token {
                Some(page_token) => request = PageRequest::Continue { page_token },
                None => return Ok(SyncCursor::empty()),
            }
        }
    }

    /// Persist the cursor, its timestamped audit copy, and the artifact, in
    /// that order. Each write is attempted once; failures land on the
    /// report and never roll back an earlier write.
    async fn commit(
        &self,
        cursor: &SyncCursor,
        audit_name: &str,
        artifact_name: &str,
        artifact: Vec<u8>,
        report: &mut RunReport,
    ) {
        let cursor_key = self.object_key(&self.config.cursor_key);
        let audit_key = self.object_key(audit_name);
        let artifact_key = self.object_key(artifact_name);
        let cursor_body = cursor.as_str().as_bytes().to_vec();

        self.commit_write(&cursor_key, cursor_body.clone(), CURSOR_CONTENT_TYPE, "cursor", report)
            .await;
        self.commit_write(&audit_key, cursor_body, CURSOR_CONTENT_TYPE, "cursor audit", report)
            .await;
        if self
            .commit_write(&artifact_key, artifact, ARTIFACT_CONTENT_TYPE, "artifact", report)
            .await
        {
            report.artifact_key = Some(artifact_key);
        }
    }

    async fn commit_write(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
        what: &str,
        report: &mut RunReport,
    ) -> bool {
        match self.store.put(key, body, content_type).await {
            Ok(()) => {
                debug!(key = %key, "{} written", what);
                true
            }
            Err(err) => {
                error!(key = %key, error = %err, "{} write failed", what);
                report.commit_errors.push(format!("{what} write to {key}: {err}"));
                false
            }
        }
    }

    fn object_key(&self, name: &str) -> String {
        format!("{}/{}", self.config.bucket_prefix, name)
    }
}
