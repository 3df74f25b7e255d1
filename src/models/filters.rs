use super::{Appointment, AppointmentStatus, Patient};

/// Case-insensitive substring match; an empty needle matches everything.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientFilter {
    /// Matched against "first last".
    pub name: String,
    pub email: String,
}

impl PatientFilter {
    pub fn matches(&self, patient: &Patient) -> bool {
        contains_ci(&patient.full_name(), &self.name) && contains_ci(&patient.email, &self.email)
    }

    pub fn apply<'a>(&self, patients: &'a [Patient]) -> Vec<&'a Patient> {
        patients.iter().filter(|p| self.matches(p)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentFilter {
    pub reason: String,
    /// Exact match; `None` shows every status.
    pub status: Option<AppointmentStatus>,
}

impl AppointmentFilter {
    pub fn matches(&self, appointment: &Appointment) -> bool {
        contains_ci(&appointment.reason, &self.reason)
            && self.status.map_or(true, |s| appointment.status == s)
    }

    pub fn apply<'a>(&self, appointments: &'a [Appointment]) -> Vec<&'a Appointment> {
        appointments.iter().filter(|a| self.matches(a)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.reason.is_empty() && self.status.is_none()
    }
}
