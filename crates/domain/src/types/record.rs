//! Raw change-feed record
//!
//! Shape of one element of the change feed's `value` array. Every field is
//! optional and unknown keys are ignored, so envelope parsing never fails on
//! sparse records.

use serde::{Deserialize, Serialize};

/// One raw appointment change as delivered by the feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawChangeRecord {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sparse_records_with_unknown_keys() {
        let record: RawChangeRecord = serde_json::from_str(
            r#"{
                "appointmentId": "apt-1",
                "subject": "Onboarding",
                "isBillable": true,
                "durationMins": 90,
                "@odata.etag": "W/\"abc\"",
                "organizer": { "emailAddress": { "address": "alice@example.com" } }
            }"#,
        )
        .unwrap();

        assert_eq!(record.appointment_id.as_deref(), Some("apt-1"));
        assert_eq!(record.subject.as_deref(), Some("Onboarding"));
        assert_eq!(record.is_billable, Some(true));
        assert_eq!(record.duration_mins, Some(90.0));
        assert_eq!(record.hotel_id, None);
    }
}
