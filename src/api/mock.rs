//! In-memory backend double for page-controller tests.
//!
//! Behaves like the REST service (assigns ids, removes on delete, scopes
//! appointment lists by patient) and records every call it receives.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::api::error::ApiError;
use crate::api::types::{AppointmentApi, PatientApi};
use crate::models::{Appointment, AppointmentRequest, AppointmentStatus, Patient, PatientRequest};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    ListPatients,
    GetPatient(i64),
    CreatePatient(PatientRequest),
    UpdatePatient(i64, PatientRequest),
    DeletePatient(i64),
    ListAppointments(Option<i64>),
    GetAppointment(i64),
    CreateAppointment(AppointmentRequest),
    UpdateAppointmentStatus(i64, AppointmentStatus),
    DeleteAppointment(i64),
}

#[derive(Default)]
struct MockState {
    patients: Vec<Patient>,
    appointments: Vec<Appointment>,
    next_id: i64,
    calls: Vec<Call>,
    /// Message returned by every call while set.
    fail_with: Option<String>,
    /// Message returned only by list calls while set.
    fail_lists_with: Option<String>,
}

/// Cloning shares the same backend state.
#[derive(Clone, Default)]
pub(crate) struct MockClinicApi {
    state: Arc<Mutex<MockState>>,
}

impl MockClinicApi {
    pub fn new() -> Self {
        let mock = Self::default();
        mock.state().next_id = 100;
        mock
    }

    pub fn with_patients(self, patients: Vec<Patient>) -> Self {
        self.state().patients = patients;
        self
    }

    pub fn with_appointments(self, appointments: Vec<Appointment>) -> Self {
        self.state().appointments = appointments;
        self
    }

    pub fn fail_with(&self, message: Option<&str>) {
        self.state().fail_with = message.map(str::to_string);
    }

    pub fn fail_lists_with(&self, message: Option<&str>) {
        self.state().fail_lists_with = message.map(str::to_string);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state().calls.clone()
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.state().calls.iter().filter(|c| matches(c)).count()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().expect("mock state lock")
    }

    /// Record the call, then fail if a failure is configured.
    fn enter(&self, call: Call) -> Result<MutexGuard<'_, MockState>, ApiError> {
        let is_list = matches!(call, Call::ListPatients | Call::ListAppointments(_));
        let mut state = self.state();
        state.calls.push(call);
        if let Some(message) = &state.fail_with {
            return Err(ApiError::Client(message.clone()));
        }
        if is_list {
            if let Some(message) = &state.fail_lists_with {
                return Err(ApiError::Client(message.clone()));
            }
        }
        Ok(state)
    }
}

fn not_found() -> ApiError {
    ApiError::Status {
        status: 404,
        body: String::new(),
    }
}

impl PatientApi for MockClinicApi {
    async fn list_patients(&self) -> Result<Vec<Patient>, ApiError> {
        let state = self.enter(Call::ListPatients)?;
        Ok(state.patients.clone())
    }

    async fn get_patient(&self, id: i64) -> Result<Patient, ApiError> {
        let state = self.enter(Call::GetPatient(id))?;
        state
            .patients
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn create_patient(&self, request: &PatientRequest) -> Result<Patient, ApiError> {
        let mut state = self.enter(Call::CreatePatient(request.clone()))?;
        state.next_id += 1;
        let patient = Patient {
            id: state.next_id,
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
            date_of_birth: request.date_of_birth.clone(),
        };
        state.patients.push(patient.clone());
        Ok(patient)
    }

    async fn update_patient(
        &self,
        id: i64,
        request: &PatientRequest,
    ) -> Result<Patient, ApiError> {
        let mut state = self.enter(Call::UpdatePatient(id, request.clone()))?;
        let patient = state
            .patients
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(not_found)?;
        patient.first_name = request.first_name.clone();
        patient.last_name = request.last_name.clone();
        patient.email = request.email.clone();
        patient.phone = request.phone.clone();
        patient.date_of_birth = request.date_of_birth.clone();
        Ok(patient.clone())
    }

    async fn delete_patient(&self, id: i64) -> Result<(), ApiError> {
        let mut state = self.enter(Call::DeletePatient(id))?;
        let before = state.patients.len();
        state.patients.retain(|p| p.id != id);
        if state.patients.len() == before {
            return Err(not_found());
        }
        Ok(())
    }
}

impl AppointmentApi for MockClinicApi {
    async fn list_appointments(
        &self,
        patient_id: Option<i64>,
    ) -> Result<Vec<Appointment>, ApiError> {
        let state = self.enter(Call::ListAppointments(patient_id))?;
        Ok(state
            .appointments
            .iter()
            .filter(|a| patient_id.map_or(true, |p| a.patient_id == p))
            .cloned()
            .collect())
    }

    async fn get_appointment(&self, id: i64) -> Result<Appointment, ApiError> {
        let state = self.enter(Call::GetAppointment(id))?;
        state
            .appointments
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn create_appointment(
        &self,
        request: &AppointmentRequest,
    ) -> Result<Appointment, ApiError> {
        let mut state = self.enter(Call::CreateAppointment(request.clone()))?;
        state.next_id += 1;
        let appointment = Appointment {
            id: state.next_id,
            patient_id: request.patient_id,
            appointment_date_time: request.appointment_date_time.clone(),
            reason: request.reason.clone(),
            status: AppointmentStatus::Scheduled,
        };
        state.appointments.push(appointment.clone());
        Ok(appointment)
    }

    async fn update_appointment_status(
        &self,
        id: i64,
        status: AppointmentStatus,
    ) -> Result<Appointment, ApiError> {
        let mut state = self.enter(Call::UpdateAppointmentStatus(id, status))?;
        let appointment = state
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(not_found)?;
        appointment.status = status;
        Ok(appointment.clone())
    }

    async fn delete_appointment(&self, id: i64) -> Result<(), ApiError> {
        let mut state = self.enter(Call::DeleteAppointment(id))?;
        let before = state.appointments.len();
        state.appointments.retain(|a| a.id != id);
        if state.appointments.len() == before {
            return Err(not_found());
        }
        Ok(())
    }
}
