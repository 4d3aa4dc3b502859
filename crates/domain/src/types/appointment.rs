//! Export row model
//!
//! `Appointment` is the canonical row written to the export artifact. The
//! column order is fixed regardless of which fields are populated; absent
//! values serialize as empty.

use serde::{Deserialize, Serialize};

/// Number of columns in the export format.
pub const COLUMN_COUNT: usize = 25;

/// Canonical appointment row.
///
/// Every field is optional; the export writes an empty value for anything
/// the feed did not populate. Durations and flags are passed through as
/// received, never recalculated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub appointment_id: Option<String>,
    pub hotel_id: Option<String>,
    pub hotel_name: Option<String>,
    pub opportunity_id: Option<String>,
    pub user_id: Option<String>,
    pub activity_type: Option<String>,
    pub start_date_time: Option<String>,
    pub end_date_time: Option<String>,
    pub appointment_status: Option<String>,
    pub duration_mins: Option<f64>,
    pub duration_days: Option<f64>,
    pub duration_hours: Option<f64>,
    pub is_billable: Option<bool>,
    pub location: Option<String>,
    pub activity_details: Option<String>,
    pub notes: Option<String>,
    pub is_trainer_local: Option<bool>,
    pub original_start_date: Option<String>,
    pub original_end_date: Option<String>,
    pub created_by: Option<String>,
    pub created_date: Option<String>,
    pub modified_by: Option<String>,
    pub modified_date: Option<String>,
    pub subject: Option<String>,
    pub event_type: Option<String>,
}

impl Appointment {
    /// Field values in the fixed export column order.
    pub fn to_row(&self) -> [String; COLUMN_COUNT] {
        [
            text(&self.appointment_id),
            text(&self.hotel_id),
            text(&self.hotel_name),
            text(&self.opportunity_id),
            text(&self.user_id),
            text(&self.activity_type),
            text(&self.start_date_time),
            text(&self.end_date_time),
            text(&self.appointment_status),
            number(self.duration_mins),
            number(self.duration_days),
            number(self.duration_hours),
            flag(self.is_billable),
            text(&self.location),
            text(&self.activity_details),
            text(&self.notes),
            flag(self.is_trainer_local),
            text(&self.original_start_date),
            text(&self.original_end_date),
            text(&self.created_by),
            text(&self.created_date),
            text(&self.modified_by),
            text(&self.modified_date),
            text(&self.subject),
            text(&self.event_type),
        ]
    }
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn flag(value: Option<bool>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
