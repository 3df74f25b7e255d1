//! Patients page controller.
//!
//! Owns the fetched patient list, the loading/error flags, the name and
//! email filters and the edit target. Every mutation is followed by a full
//! reload; the local list is never patched in place.

use crate::api::{error_message, ApiError, PatientApi};
use crate::components::{FormError, PatientForm, PatientList, PatientListAction};
use crate::models::{Patient, PatientFilter, PatientRequest};
use crate::pages::sequence::{LoadSequence, LoadTicket};

const LOAD_FALLBACK: &str = "Failed to load patients";
const SAVE_FALLBACK: &str = "Failed to save patient";
const DELETE_FALLBACK: &str = "Failed to delete patient";

pub struct PatientsPage<A> {
    api: A,
    patients: Vec<Patient>,
    loading: bool,
    error: Option<String>,
    filter: PatientFilter,
    editing: Option<Patient>,
    form: PatientForm,
    sequence: LoadSequence,
}

impl<A: PatientApi> PatientsPage<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            patients: Vec::new(),
            loading: false,
            error: None,
            filter: PatientFilter::default(),
            editing: None,
            form: PatientForm::new(),
            sequence: LoadSequence::new(),
        }
    }

    /// Initial fetch when the page is shown.
    pub async fn mount(&mut self) {
        self.load().await;
    }

    // ── Loading ─────────────────────────────────────────────

    pub async fn load(&mut self) {
        let ticket = self.begin_load();
        let result = self.api.list_patients().await;
        self.finish_load(ticket, result);
    }

    /// Start a fetch: set loading, clear the error banner.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.loading = true;
        self.error = None;
        self.sequence.issue()
    }

    /// Apply a fetch result unless a newer one has already landed.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<Patient>, ApiError>) {
        if self.sequence.complete(ticket) {
            match result {
                Ok(patients) => {
                    tracing::debug!(count = patients.len(), "Patients loaded");
                    self.patients = patients;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Patient list load failed");
                    self.error = Some(error_message(&e, LOAD_FALLBACK));
                }
            }
        } else {
            tracing::debug!(?ticket, "Discarding stale patient list");
        }
        self.loading = self.sequence.is_busy();
    }

    // ── Mutations ───────────────────────────────────────────

    /// Update the edit target if one is set, otherwise create.
    pub async fn submit(&mut self, request: PatientRequest) {
        let editing_id = self.editing.as_ref().map(|p| p.id);
        let result = match editing_id {
            Some(id) => self.api.update_patient(id, &request).await.map(|_| ()),
            None => self.api.create_patient(&request).await.map(|_| ()),
        };

        match result {
            Ok(()) => {
                tracing::info!(id = ?editing_id, "Patient saved");
                self.set_editing(None);
                self.load().await;
            }
            Err(e) => self.error = Some(error_message(&e, SAVE_FALLBACK)),
        }
    }

    /// Validate the form draft and submit it.
    pub async fn submit_form(&mut self) -> Result<(), FormError> {
        let request = self.form.submit()?;
        self.submit(request).await;
        Ok(())
    }

    pub async fn delete(&mut self, id: i64) {
        match self.api.delete_patient(id).await {
            Ok(()) => {
                tracing::info!(id, "Patient deleted");
                if self.editing.as_ref().is_some_and(|p| p.id == id) {
                    self.set_editing(None);
                }
                self.load().await;
            }
            Err(e) => self.error = Some(error_message(&e, DELETE_FALLBACK)),
        }
    }

    /// Make a loaded patient the edit target. Returns `false` when no row
    /// with that id is loaded.
    pub fn edit(&mut self, id: i64) -> bool {
        match self.patients.iter().find(|p| p.id == id).cloned() {
            Some(patient) => {
                self.set_editing(Some(patient));
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.set_editing(None);
    }

    fn set_editing(&mut self, editing: Option<Patient>) {
        self.editing = editing;
        self.form.sync_editing(self.editing.as_ref());
    }

    /// Dispatch a row action from the patient table.
    pub async fn handle(&mut self, action: PatientListAction) -> bool {
        match action {
            PatientListAction::Edit(id) => self.edit(id),
            PatientListAction::Delete(id) => {
                self.delete(id).await;
                true
            }
        }
    }

    // ── Filters ─────────────────────────────────────────────

    pub fn set_name_filter(&mut self, value: &str) {
        self.filter.name = value.to_string();
    }

    pub fn set_email_filter(&mut self, value: &str) {
        self.filter.email = value.to_string();
    }

    /// Loaded patients passing both filters.
    pub fn visible(&self) -> Vec<&Patient> {
        self.filter.apply(&self.patients)
    }

    // ── Accessors ───────────────────────────────────────────

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn filter(&self) -> &PatientFilter {
        &self.filter
    }

    pub fn editing(&self) -> Option<&Patient> {
        self.editing.as_ref()
    }

    pub fn form(&self) -> &PatientForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PatientForm {
        &mut self.form
    }

    pub fn render(&self) -> String {
        let mut out = String::from("Patients\n\n");
        if let Some(error) = &self.error {
            out.push_str(&format!("! {error}\n\n"));
        }
        out.push_str(&format!(
            "Filter by Name: {}    Filter by Email: {}\n\n",
            self.filter.name, self.filter.email
        ));
        match &self.editing {
            Some(p) => out.push_str(&format!("Editing patient {} ({})\n", p.id, p.full_name())),
            None => out.push_str("New patient\n"),
        }
        out.push_str(&self.form.render());
        out.push('\n');
        if self.loading {
            out.push_str("Loading...\n");
        } else {
            let visible = self.visible();
            out.push_str(&PatientList { patients: &visible }.render());
        }
        out
    }
}
