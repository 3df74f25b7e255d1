//! Resource-client seams used by the page controllers.
//!
//! `HttpClient` implements both traits against the REST backend; tests
//! drive the controllers with an in-memory double instead.

use crate::api::error::ApiError;
use crate::models::{Appointment, AppointmentRequest, AppointmentStatus, Patient, PatientRequest};

/// One method per `/api/patients` operation.
#[allow(async_fn_in_trait)]
pub trait PatientApi {
    async fn list_patients(&self) -> Result<Vec<Patient>, ApiError>;

    async fn get_patient(&self, id: i64) -> Result<Patient, ApiError>;

    async fn create_patient(&self, request: &PatientRequest) -> Result<Patient, ApiError>;

    /// Full replace.
    async fn update_patient(&self, id: i64, request: &PatientRequest)
        -> Result<Patient, ApiError>;

    async fn delete_patient(&self, id: i64) -> Result<(), ApiError>;
}

/// One method per `/api/appointments` operation.
#[allow(async_fn_in_trait)]
pub trait AppointmentApi {
    /// `patient_id` scopes the list server-side.
    async fn list_appointments(&self, patient_id: Option<i64>)
        -> Result<Vec<Appointment>, ApiError>;

    async fn get_appointment(&self, id: i64) -> Result<Appointment, ApiError>;

    async fn create_appointment(
        &self,
        request: &AppointmentRequest,
    ) -> Result<Appointment, ApiError>;

    /// Status-only partial update; any status may follow any other.
    async fn update_appointment_status(
        &self,
        id: i64,
        status: AppointmentStatus,
    ) -> Result<Appointment, ApiError>;

    async fn delete_appointment(&self, id: i64) -> Result<(), ApiError>;
}
