//! `/api/appointments` resource client.

use crate::api::error::ApiError;
use crate::api::http::HttpClient;
use crate::api::types::AppointmentApi;
use crate::models::{Appointment, AppointmentRequest, AppointmentStatus};

const APPOINTMENTS_PATH: &str = "/api/appointments";

fn appointment_path(id: i64) -> String {
    format!("{APPOINTMENTS_PATH}/{id}")
}

impl AppointmentApi for HttpClient {
    async fn list_appointments(
        &self,
        patient_id: Option<i64>,
    ) -> Result<Vec<Appointment>, ApiError> {
        let query: Vec<(&str, String)> = patient_id
            .map(|id| vec![("patientId", id.to_string())])
            .unwrap_or_default();
        self.get(APPOINTMENTS_PATH, &query).await
    }

    async fn get_appointment(&self, id: i64) -> Result<Appointment, ApiError> {
        self.get(&appointment_path(id), &[]).await
    }

    async fn create_appointment(
        &self,
        request: &AppointmentRequest,
    ) -> Result<Appointment, ApiError> {
        self.post(APPOINTMENTS_PATH, request).await
    }

    async fn update_appointment_status(
        &self,
        id: i64,
        status: AppointmentStatus,
    ) -> Result<Appointment, ApiError> {
        let path = format!("{}/status", appointment_path(id));
        self.patch(&path, &[("status", status.as_str().to_string())])
            .await
    }

    async fn delete_appointment(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&appointment_path(id)).await
    }
}
