use crate::components::FormError;
use crate::models::{Patient, PatientRequest};

/// In-progress input, one string per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
}

impl From<&Patient> for PatientDraft {
    fn from(p: &Patient) -> Self {
        Self {
            first_name: p.first_name.clone(),
            last_name: p.last_name.clone(),
            email: p.email.clone(),
            phone: p.phone.clone().unwrap_or_default(),
            date_of_birth: p.date_of_birth.clone().unwrap_or_default(),
        }
    }
}

/// Create/update form for a patient.
///
/// Holds only the draft. While an edit target is synced in, submitting keeps
/// the draft; otherwise a successful submit clears it.
#[derive(Debug, Default)]
pub struct PatientForm {
    draft: PatientDraft,
    editing: Option<Patient>,
}

impl PatientForm {
    /// Field names accepted by `set_field`, with their labels.
    pub const FIELDS: &'static [(&'static str, &'static str)] = &[
        ("firstName", "First Name"),
        ("lastName", "Last Name"),
        ("email", "Email"),
        ("phone", "Phone"),
        ("dateOfBirth", "Date of Birth"),
    ];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &PatientDraft {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Patient"
        } else {
            "Create Patient"
        }
    }

    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let slot = match name.to_ascii_lowercase().as_str() {
            "firstname" | "first_name" | "first" => &mut self.draft.first_name,
            "lastname" | "last_name" | "last" => &mut self.draft.last_name,
            "email" => &mut self.draft.email,
            "phone" => &mut self.draft.phone,
            "dateofbirth" | "date_of_birth" | "dob" => &mut self.draft.date_of_birth,
            _ => return Err(FormError::UnknownField(name.to_string())),
        };
        *slot = value.to_string();
        Ok(())
    }

    /// Follow the page's edit target. A new target repopulates the draft;
    /// dropping the target clears it.
    pub fn sync_editing(&mut self, editing: Option<&Patient>) {
        match editing {
            Some(patient) if self.editing.as_ref() != Some(patient) => {
                self.draft = PatientDraft::from(patient);
                self.editing = Some(patient.clone());
            }
            Some(_) => {}
            None => {
                if self.editing.take().is_some() {
                    self.draft = PatientDraft::default();
                }
            }
        }
    }

    /// Check required fields and build the payload. Blank optional fields
    /// are left out of the request.
    pub fn submit(&mut self) -> Result<PatientRequest, FormError> {
        let d = &self.draft;
        for (value, label) in [
            (&d.first_name, "First Name"),
            (&d.last_name, "Last Name"),
            (&d.email, "Email"),
        ] {
            if value.trim().is_empty() {
                return Err(FormError::MissingField(label));
            }
        }

        let request = PatientRequest {
            first_name: d.first_name.clone(),
            last_name: d.last_name.clone(),
            email: d.email.clone(),
            phone: non_blank(&d.phone),
            date_of_birth: non_blank(&d.date_of_birth),
        };

        if !self.is_editing() {
            self.draft = PatientDraft::default();
        }
        Ok(request)
    }

    pub fn render(&self) -> String {
        let d = &self.draft;
        let values = [
            &d.first_name,
            &d.last_name,
            &d.email,
            &d.phone,
            &d.date_of_birth,
        ];
        let mut out = String::new();
        for ((name, label), value) in Self::FIELDS.iter().zip(values) {
            out.push_str(&format!("  {label} ({name}): {value}\n"));
        }
        out.push_str(&format!("  [{}]\n", self.submit_label()));
        out
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
