use crate::components::FormError;
use crate::models::AppointmentRequest;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentDraft {
    pub patient_id: String,
    pub appointment_date_time: String,
    pub reason: String,
}

/// Create-only appointment form. Resets to the default patient after submit.
#[derive(Debug, Default)]
pub struct AppointmentForm {
    draft: AppointmentDraft,
    default_patient_id: Option<i64>,
}

impl AppointmentForm {
    pub const FIELDS: &'static [(&'static str, &'static str)] = &[
        ("patientId", "Patient ID"),
        ("appointmentDateTime", "Date & Time"),
        ("reason", "Reason"),
    ];

    pub fn new(default_patient_id: Option<i64>) -> Self {
        let mut form = Self {
            draft: AppointmentDraft::default(),
            default_patient_id,
        };
        form.reset();
        form
    }

    pub fn draft(&self) -> &AppointmentDraft {
        &self.draft
    }

    /// Follow the page's patient scope. Fills the patient id only when the
    /// user has not typed one.
    pub fn set_default_patient_id(&mut self, patient_id: Option<i64>) {
        let previous = self.default_patient_id.map(|id| id.to_string());
        self.default_patient_id = patient_id;
        if self.draft.patient_id.is_empty() || Some(&self.draft.patient_id) == previous.as_ref() {
            self.draft.patient_id = patient_id.map(|id| id.to_string()).unwrap_or_default();
        }
    }

    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let slot = match name.to_ascii_lowercase().as_str() {
            "patientid" | "patient_id" | "patient" => &mut self.draft.patient_id,
            "appointmentdatetime" | "appointment_date_time" | "datetime" | "when" => {
                &mut self.draft.appointment_date_time
            }
            "reason" => &mut self.draft.reason,
            _ => return Err(FormError::UnknownField(name.to_string())),
        };
        *slot = value.to_string();
        Ok(())
    }

    pub fn submit(&mut self) -> Result<AppointmentRequest, FormError> {
        let d = &self.draft;
        for (value, label) in [
            (&d.patient_id, "Patient ID"),
            (&d.appointment_date_time, "Date & Time"),
            (&d.reason, "Reason"),
        ] {
            if value.trim().is_empty() {
                return Err(FormError::MissingField(label));
            }
        }
        let patient_id = d
            .patient_id
            .trim()
            .parse::<i64>()
            .map_err(|_| FormError::InvalidNumber("Patient ID"))?;

        let request = AppointmentRequest {
            patient_id,
            appointment_date_time: d.appointment_date_time.clone(),
            reason: d.reason.clone(),
        };
        self.reset();
        Ok(request)
    }

    fn reset(&mut self) {
        self.draft = AppointmentDraft {
            patient_id: self
                .default_patient_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            ..Default::default()
        };
    }

    pub fn render(&self) -> String {
        let d = &self.draft;
        let values = [&d.patient_id, &d.appointment_date_time, &d.reason];
        let mut out = String::new();
        for ((name, label), value) in Self::FIELDS.iter().zip(values) {
            out.push_str(&format!("  {label} ({name}): {value}\n"));
        }
        out.push_str("  [Create Appointment]\n");
        out
    }
}
