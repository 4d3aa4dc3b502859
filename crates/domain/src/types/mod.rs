//! Domain types and models

pub mod appointment;
pub mod cursor;
pub mod record;
pub mod report;

pub use appointment::{Appointment, COLUMN_COUNT};
pub use cursor::SyncCursor;
pub use record::RawChangeRecord;
pub use report::{RunReport, RunStatus, SyncPhase, WalkFailure};
