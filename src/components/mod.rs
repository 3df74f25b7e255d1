//! Presentational components: tables, forms and the layout frame.
//!
//! Nothing here fetches. Lists render the rows they are handed and name the
//! row actions they offer; forms own only their in-progress draft.

pub mod appointment_form;
pub mod appointment_list;
pub mod layout;
pub mod patient_form;
pub mod patient_list;
pub mod table;

pub use appointment_form::AppointmentForm;
pub use appointment_list::{AppointmentList, AppointmentListAction};
pub use layout::Layout;
pub use patient_form::PatientForm;
pub use patient_list::{PatientList, PatientListAction};

/// Form submission rejected before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0} must be a number")]
    InvalidNumber(&'static str),
    #[error("Unknown field: {0}")]
    UnknownField(String),
}
