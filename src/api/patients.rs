//! `/api/patients` resource client.

use crate::api::error::ApiError;
use crate::api::http::HttpClient;
use crate::api::types::PatientApi;
use crate::models::{Patient, PatientRequest};

const PATIENTS_PATH: &str = "/api/patients";

fn patient_path(id: i64) -> String {
    format!("{PATIENTS_PATH}/{id}")
}

impl PatientApi for HttpClient {
    async fn list_patients(&self) -> Result<Vec<Patient>, ApiError> {
        self.get(PATIENTS_PATH, &[]).await
    }

    async fn get_patient(&self, id: i64) -> Result<Patient, ApiError> {
        self.get(&patient_path(id), &[]).await
    }

    async fn create_patient(&self, request: &PatientRequest) -> Result<Patient, ApiError> {
        self.post(PATIENTS_PATH, request).await
    }

    async fn update_patient(
        &self,
        id: i64,
        request: &PatientRequest,
    ) -> Result<Patient, ApiError> {
        self.put(&patient_path(id), request).await
    }

    async fn delete_patient(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&patient_path(id)).await
    }
}
