pub mod appointment;
pub mod enums;
pub mod filters;
pub mod patient;

pub use appointment::{Appointment, AppointmentRequest};
pub use enums::AppointmentStatus;
pub use filters::{AppointmentFilter, PatientFilter};
pub use patient::{Patient, PatientRequest};

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid {field} value: {value}")]
    InvalidEnum { field: String, value: String },
}
