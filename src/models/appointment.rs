use serde::{Deserialize, Serialize};

use super::enums::AppointmentStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    pub patient_id: i64,
    /// ISO-8601 date-time, kept as sent by the backend.
    pub appointment_date_time: String,
    pub reason: String,
    pub status: AppointmentStatus,
}

/// Creation payload. Status is assigned by the backend (SCHEDULED).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub patient_id: i64,
    pub appointment_date_time: String,
    pub reason: String,
}
