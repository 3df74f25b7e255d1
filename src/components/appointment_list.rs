use chrono::{DateTime, NaiveDateTime};

use crate::components::table::TextTable;
use crate::models::{Appointment, AppointmentStatus};

const HEADERS: &[&str] = &["ID", "Patient ID", "Date & Time", "Reason", "Status"];

/// Row actions the appointment table offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentListAction {
    Delete(i64),
    StatusChange(i64, AppointmentStatus),
}

/// Appointment table. Status is shown by its human label.
pub struct AppointmentList<'a> {
    pub appointments: &'a [&'a Appointment],
}

impl AppointmentList<'_> {
    pub fn render(&self) -> String {
        if self.appointments.is_empty() {
            return "No appointments\n".to_string();
        }

        let mut table = TextTable::new(HEADERS);
        for a in self.appointments {
            table.push_row(vec![
                a.id.to_string(),
                a.patient_id.to_string(),
                format_date_time(&a.appointment_date_time),
                a.reason.clone(),
                a.status.label().to_string(),
            ]);
        }
        table.render()
    }
}

/// `YYYY-MM-DD HH:MM` for ISO-8601 input, the raw text otherwise.
pub fn format_date_time(raw: &str) -> String {
    const DISPLAY: &str = "%Y-%m-%d %H:%M";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.naive_local().format(DISPLAY).to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format(DISPLAY).to_string();
        }
    }
    raw.to_string()
}
