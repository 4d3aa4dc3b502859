//! Record mapping
//!
//! Direct copy from the raw feed record into the canonical export row.
//! Durations and flags pass through as received, never recalculated.

use deltafeed_domain::{Appointment, RawChangeRecord};

/// Map one raw change record into an export row.
///
/// Total over its input: missing raw fields become empty columns.
pub fn map_record(raw: RawChangeRecord) -> Appointment {
    Appointment {
        appointment_id: raw.appointment_id,
        hotel_id: raw.hotel_id,
        hotel_name: raw.hotel_name,
        opportunity_id: raw.opportunity_id,
        user_id: raw.user_id,
        activity_type: raw.activity_type,
        start_date_time: raw.start_date_time,
        end_date_time: raw.end_date_time,
        appointment_status: raw.appointment_status,
        duration_mins: raw.duration_mins,
        duration_days: raw.duration_days,
        duration_hours: raw.duration_hours,
        is_billable: raw.is_billable,
        location: raw.location,
        activity_details: raw.activity_details,
        notes: raw.notes,
        is_trainer_local: raw.is_trainer_local,
        original_start_date: raw.original_start_date,
        original_end_date: raw.original_end_date,
        created_by: raw.created_by,
        created_date: raw.created_date,
        modified_by: raw.modified_by,
        modified_date: raw.modified_date,
        subject: raw.subject,
        event_type: raw.event_type,
    }
}
