//! REST API access.
//!
//! `http` holds the single configured transport; `patients` and
//! `appointments` map each resource onto REST verbs through the
//! `PatientApi` / `AppointmentApi` traits in `types`.

pub mod appointments;
pub mod error;
pub mod http;
pub mod patients;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;
#[cfg(test)]
pub(crate) mod test_server;

pub use error::{error_message, ApiError};
pub use http::HttpClient;
pub use types::{AppointmentApi, PatientApi};
