pub mod appointments;
pub mod patients;
pub mod sequence;

pub use appointments::AppointmentsPage;
pub use patients::PatientsPage;
