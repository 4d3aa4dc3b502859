//! Pipe-delimited CSV spool sink
//!
//! Streams rows into a fresh file under the spool directory, then hands the
//! finalized bytes back for upload. The format is header-less and
//! pipe-delimited, with quoting only where a field would otherwise break the
//! row.

use std::fs::File;
use std::path::PathBuf;

use csv::{QuoteStyle, Writer, WriterBuilder};
use deltafeed_core::{ExportSink, ExportSinkFactory};
use deltafeed_domain::constants::EXPORT_DELIMITER;
use deltafeed_domain::{Appointment, DeltaFeedError, Result};
use tracing::debug;

use crate::errors::InfraError;

/// Opens one pipe-delimited spool file per run.
pub struct SpoolSinkFactory {
    dir: PathBuf,
}

impl SpoolSinkFactory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ExportSinkFactory for SpoolSinkFactory {
    fn open(&self, file_name: &str) -> Result<Box<dyn ExportSink>> {
        let path = self.dir.join(file_name);
        let writer = WriterBuilder::new()
            .delimiter(EXPORT_DELIMITER)
            .has_headers(false)
            .quote_style(QuoteStyle::Necessary)
            .from_path(&path)
            .map_err(InfraError::from)?;

        debug!(path = %path.display(), "export spool opened");
        Ok(Box::new(CsvSpoolSink { writer, path }))
    }
}

/// CSV writer over a single spool file.
struct CsvSpoolSink {
    writer: Writer<File>,
    path: PathBuf,
}

impl ExportSink for CsvSpoolSink {
    fn append_rows(&mut self, rows: &[Appointment]) -> Result<()> {
        for row in rows {
            self.writer.write_record(&row.to_row()).map_err(InfraError::from)?;
        }
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<Vec<u8>> {
        let CsvSpoolSink { mut writer, path } = *self;

        writer
            .flush()
            .map_err(|e| DeltaFeedError::Export(format!("Failed to flush export spool: {}", e)))?;
        drop(writer);

        std::fs::read(&path).map_err(|e| {
            DeltaFeedError::Export(format!(
                "Failed to read back export spool {}: {}",
                path.display(),
                e
            ))
        })
    }
}
