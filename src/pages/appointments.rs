//! Appointments page controller.
//!
//! Two kinds of filtering:
//! - reason substring and exact status, applied to the loaded list
//! - patient id, applied server-side by reloading once "Apply Filter" runs

use crate::api::{error_message, ApiError, AppointmentApi};
use crate::components::{AppointmentForm, AppointmentList, AppointmentListAction, FormError};
use crate::models::{Appointment, AppointmentFilter, AppointmentRequest, AppointmentStatus};
use crate::pages::sequence::{LoadSequence, LoadTicket};

const LOAD_FALLBACK: &str = "Failed to load appointments";
const CREATE_FALLBACK: &str = "Failed to create appointment";
const DELETE_FALLBACK: &str = "Failed to delete appointment";
const STATUS_FALLBACK: &str = "Failed to update status";
const INVALID_PATIENT_FILTER: &str = "Patient ID must be a number";

pub struct AppointmentsPage<A> {
    api: A,
    appointments: Vec<Appointment>,
    loading: bool,
    error: Option<String>,
    filter: AppointmentFilter,
    /// Typed into the patient-id box, not yet applied.
    patient_filter_draft: String,
    /// Applied server-side scope.
    patient_scope: Option<i64>,
    form: AppointmentForm,
    sequence: LoadSequence,
}

impl<A: AppointmentApi> AppointmentsPage<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            appointments: Vec::new(),
            loading: false,
            error: None,
            filter: AppointmentFilter::default(),
            patient_filter_draft: String::new(),
            patient_scope: None,
            form: AppointmentForm::new(None),
            sequence: LoadSequence::new(),
        }
    }

    pub async fn mount(&mut self) {
        self.load().await;
    }

    // ── Loading ─────────────────────────────────────────────

    pub async fn load(&mut self) {
        let ticket = self.begin_load();
        let result = self.api.list_appointments(self.patient_scope).await;
        self.finish_load(ticket, result);
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.loading = true;
        self.error = None;
        self.sequence.issue()
    }

    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Appointment>, ApiError>,
    ) {
        if self.sequence.complete(ticket) {
            match result {
                Ok(appointments) => {
                    tracing::debug!(
                        count = appointments.len(),
                        patient_id = ?self.patient_scope,
                        "Appointments loaded"
                    );
                    self.appointments = appointments;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Appointment list load failed");
                    self.error = Some(error_message(&e, LOAD_FALLBACK));
                }
            }
        } else {
            tracing::debug!(?ticket, "Discarding stale appointment list");
        }
        self.loading = self.sequence.is_busy();
    }

    // ── Mutations ───────────────────────────────────────────

    pub async fn submit(&mut self, request: AppointmentRequest) {
        match self.api.create_appointment(&request).await {
            Ok(created) => {
                tracing::info!(id = created.id, patient_id = created.patient_id, "Appointment created");
                self.load().await;
            }
            Err(e) => self.error = Some(error_message(&e, CREATE_FALLBACK)),
        }
    }

    pub async fn submit_form(&mut self) -> Result<(), FormError> {
        let request = self.form.submit()?;
        self.submit(request).await;
        Ok(())
    }

    pub async fn delete(&mut self, id: i64) {
        match self.api.delete_appointment(id).await {
            Ok(()) => {
                tracing::info!(id, "Appointment deleted");
                self.load().await;
            }
            Err(e) => self.error = Some(error_message(&e, DELETE_FALLBACK)),
        }
    }

    /// Any status may follow any other; the backend decides.
    pub async fn status_change(&mut self, id: i64, status: AppointmentStatus) {
        match self.api.update_appointment_status(id, status).await {
            Ok(_) => {
                tracing::info!(id, status = status.as_str(), "Appointment status changed");
                self.load().await;
            }
            Err(e) => self.error = Some(error_message(&e, STATUS_FALLBACK)),
        }
    }

    pub async fn handle(&mut self, action: AppointmentListAction) {
        match action {
            AppointmentListAction::Delete(id) => self.delete(id).await,
            AppointmentListAction::StatusChange(id, status) => {
                self.status_change(id, status).await
            }
        }
    }

    // ── Filters ─────────────────────────────────────────────

    pub fn set_reason_filter(&mut self, value: &str) {
        self.filter.reason = value.to_string();
    }

    pub fn set_status_filter(&mut self, status: Option<AppointmentStatus>) {
        self.filter.status = status;
    }

    pub fn set_patient_filter_draft(&mut self, value: &str) {
        self.patient_filter_draft = value.to_string();
    }

    /// Apply the typed patient id as the server-side scope and reload.
    /// An empty draft or `0` removes the scope.
    pub async fn apply_patient_filter(&mut self) {
        let draft = self.patient_filter_draft.trim();
        let scope = if draft.is_empty() {
            None
        } else {
            match draft.parse::<i64>() {
                Ok(0) => None,
                Ok(id) => Some(id),
                Err(_) => {
                    self.error = Some(INVALID_PATIENT_FILTER.to_string());
                    return;
                }
            }
        };
        self.set_scope(scope);
        self.load().await;
    }

    pub async fn clear_patient_filter(&mut self) {
        self.patient_filter_draft.clear();
        self.set_scope(None);
        self.load().await;
    }

    fn set_scope(&mut self, scope: Option<i64>) {
        self.patient_scope = scope;
        self.form.set_default_patient_id(scope);
    }

    /// Loaded appointments passing the reason and status filters.
    pub fn visible(&self) -> Vec<&Appointment> {
        self.filter.apply(&self.appointments)
    }

    // ── Accessors ───────────────────────────────────────────

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn filter(&self) -> &AppointmentFilter {
        &self.filter
    }

    pub fn patient_scope(&self) -> Option<i64> {
        self.patient_scope
    }

    pub fn form(&self) -> &AppointmentForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut AppointmentForm {
        &mut self.form
    }

    pub fn render(&self) -> String {
        let mut out = String::from("Appointments\n\n");
        if let Some(error) = &self.error {
            out.push_str(&format!("! {error}\n\n"));
        }
        let status = self.filter.status.map_or("All", |s| s.label());
        out.push_str(&format!(
            "Filter by Reason: {}    Filter by Status: {}\n",
            self.filter.reason, status
        ));
        let scope = self
            .patient_scope
            .map_or_else(|| "all patients".to_string(), |id| format!("patient {id}"));
        out.push_str(&format!(
            "Filter by Patient ID: {}    [Apply Filter]    (showing {scope})\n\n",
            self.patient_filter_draft
        ));
        out.push_str("New appointment\n");
        out.push_str(&self.form.render());
        out.push('\n');
        if self.loading {
            out.push_str("Loading...\n");
        } else {
            let visible = self.visible();
            out.push_str(&AppointmentList { appointments: &visible }.render());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{Call, MockClinicApi};

    fn appointment(id: i64, patient_id: i64, reason: &str, status: AppointmentStatus) -> Appointment {
        Appointment {
            id,
            patient_id,
            appointment_date_time: format!("2025-11-2{id}T10:00:00"),
            reason: reason.into(),
            status,
        }
    }

    fn seeded() -> MockClinicApi {
        MockClinicApi::new().with_appointments(vec![
            appointment(1, 1, "Annual checkup", AppointmentStatus::Scheduled),
            appointment(2, 2, "Follow-up visit", AppointmentStatus::Completed),
            appointment(3, 1, "Dental cleaning", AppointmentStatus::Cancelled),
        ])
    }

    async fn mounted(api: &MockClinicApi) -> AppointmentsPage<MockClinicApi> {
        let mut page = AppointmentsPage::new(api.clone());
        page.mount().await;
        page
    }

    fn list_calls(api: &MockClinicApi) -> usize {
        api.count(|c| matches!(c, Call::ListAppointments(_)))
    }

    fn visible_ids(page: &AppointmentsPage<MockClinicApi>) -> Vec<i64> {
        page.visible().iter().map(|a| a.id).collect()
    }

    #[tokio::test]
    async fn mount_loads_and_renders_labels() {
        let api = seeded();
        let page = mounted(&api).await;

        assert_eq!(list_calls(&api), 1);
        let rendered = page.render();
        assert!(rendered.starts_with("Appointments"));
        for text in ["Annual checkup", "Follow-up visit", "Dental cleaning"] {
            assert!(rendered.contains(text), "missing {text}");
        }
        for label in ["Scheduled", "Completed", "Cancelled"] {
            assert!(rendered.contains(label), "missing {label}");
        }
    }

    #[tokio::test]
    async fn reason_filter_narrows_list() {
        let api = seeded();
        let mut page = mounted(&api).await;

        page.set_reason_filter("checkup");
        assert_eq!(visible_ids(&page), vec![1]);

        page.set_reason_filter("");
        assert_eq!(visible_ids(&page), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn status_filter_narrows_list() {
        let api = seeded();
        let mut page = mounted(&api).await;

        page.set_status_filter(Some(AppointmentStatus::Completed));
        assert_eq!(visible_ids(&page), vec![2]);
        assert!(page.render().contains("Filter by Status: Completed"));
    }

    #[tokio::test]
    async fn reason_and_status_combine() {
        let api = seeded();
        let mut page = mounted(&api).await;

        page.set_reason_filter("visit");
        page.set_status_filter(Some(AppointmentStatus::Completed));
        assert_eq!(visible_ids(&page), vec![2]);

        page.set_status_filter(Some(AppointmentStatus::Scheduled));
        assert!(page.visible().is_empty());
        assert_eq!(list_calls(&api), 1);
    }

    #[tokio::test]
    async fn create_reloads_exactly_once() {
        let api = seeded();
        let mut page = mounted(&api).await;

        page.form_mut().set_field("patientId", "3").unwrap();
        page.form_mut()
            .set_field("appointmentDateTime", "2025-12-01T10:00")
            .unwrap();
        page.form_mut().set_field("reason", "New appointment").unwrap();
        page.submit_form().await.unwrap();

        assert!(api.calls().contains(&Call::CreateAppointment(AppointmentRequest {
            patient_id: 3,
            appointment_date_time: "2025-12-01T10:00".into(),
            reason: "New appointment".into(),
        })));
        assert_eq!(list_calls(&api), 2);
        assert_eq!(page.appointments().len(), 4);
    }

    #[tokio::test]
    async fn failed_create_sets_error() {
        let api = seeded();
        let mut page = mounted(&api).await;

        api.fail_with(Some("Request failed with status code 400"));
        page.submit(AppointmentRequest {
            patient_id: 1,
            appointment_date_time: "2025-12-01T10:00".into(),
            reason: "Checkup".into(),
        })
        .await;

        assert_eq!(page.error(), Some("Request failed with status code 400"));
        assert_eq!(list_calls(&api), 1);
    }

    #[tokio::test]
    async fn status_change_updates_then_reloads() {
        let api = seeded();
        let mut page = mounted(&api).await;

        page.handle(AppointmentListAction::StatusChange(2, AppointmentStatus::Completed))
            .await;

        let calls = api.calls();
        let update = calls
            .iter()
            .position(|c| *c == Call::UpdateAppointmentStatus(2, AppointmentStatus::Completed))
            .expect("status update sent");
        assert!(calls[update + 1..]
            .iter()
            .any(|c| matches!(c, Call::ListAppointments(_))));
        assert_eq!(list_calls(&api), 2);
    }

    #[tokio::test]
    async fn status_change_reflects_server_state() {
        let api = seeded();
        let mut page = mounted(&api).await;

        page.status_change(1, AppointmentStatus::NoShow).await;
        let first = page.appointments().iter().find(|a| a.id == 1).unwrap();
        assert_eq!(first.status, AppointmentStatus::NoShow);
    }

    #[tokio::test]
    async fn failed_status_change_uses_message() {
        let api = seeded();
        let mut page = mounted(&api).await;

        page.status_change(42, AppointmentStatus::Completed).await;
        assert_eq!(page.error(), Some("Request failed with status code 404"));
    }

    #[tokio::test]
    async fn delete_reloads_remaining() {
        let api = seeded();
        let mut page = mounted(&api).await;

        page.handle(AppointmentListAction::Delete(3)).await;
        assert_eq!(
            page.appointments().iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[tokio::test]
    async fn list_failure_shows_message() {
        let api = seeded();
        api.fail_lists_with(Some("API Error"));
        let page = mounted(&api).await;

        let rendered = page.render();
        assert!(rendered.contains("API Error"));
        assert!(rendered.contains("No appointments"));
    }

    #[tokio::test]
    async fn patient_filter_applies_only_on_apply() {
        let api = seeded();
        let mut page = mounted(&api).await;

        page.set_patient_filter_draft("1");
        assert_eq!(list_calls(&api), 1);
        assert_eq!(page.appointments().len(), 3);

        page.apply_patient_filter().await;
        assert_eq!(page.patient_scope(), Some(1));
        assert!(api.calls().contains(&Call::ListAppointments(Some(1))));
        assert_eq!(visible_ids(&page), vec![1, 3]);
        assert_eq!(page.form().draft().patient_id, "1");
    }

    #[tokio::test]
    async fn scoped_reload_after_mutation_keeps_scope() {
        let api = seeded();
        let mut page = mounted(&api).await;
        page.set_patient_filter_draft("1");
        page.apply_patient_filter().await;

        page.delete(1).await;
        assert_eq!(api.calls().last(), Some(&Call::ListAppointments(Some(1))));
        assert_eq!(visible_ids(&page), vec![3]);
    }

    #[tokio::test]
    async fn invalid_patient_filter_sets_error_without_reload() {
        let api = seeded();
        let mut page = mounted(&api).await;

        page.set_patient_filter_draft("abc");
        page.apply_patient_filter().await;

        assert_eq!(page.error(), Some("Patient ID must be a number"));
        assert_eq!(page.patient_scope(), None);
        assert_eq!(list_calls(&api), 1);
    }

    #[tokio::test]
    async fn zero_patient_id_means_no_scope() {
        let api = seeded();
        let mut page = mounted(&api).await;

        page.set_patient_filter_draft("0");
        page.apply_patient_filter().await;

        assert_eq!(page.patient_scope(), None);
        assert!(page.error().is_none());
        assert_eq!(api.calls().last(), Some(&Call::ListAppointments(None)));
        assert_eq!(visible_ids(&page), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn clearing_patient_filter_restores_full_list() {
        let api = seeded();
        let mut page = mounted(&api).await;
        page.set_patient_filter_draft("2");
        page.apply_patient_filter().await;
        assert_eq!(visible_ids(&page), vec![2]);

        page.clear_patient_filter().await;
        assert_eq!(page.patient_scope(), None);
        assert_eq!(api.calls().last(), Some(&Call::ListAppointments(None)));
        assert_eq!(visible_ids(&page), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn client_filters_apply_within_scope() {
        let api = seeded();
        let mut page = mounted(&api).await;
        page.set_patient_filter_draft("1");
        page.apply_patient_filter().await;
        page.set_status_filter(Some(AppointmentStatus::Cancelled));
        assert_eq!(visible_ids(&page), vec![3]);
    }

    #[test]
    fn stale_load_is_discarded() {
        let mut page = AppointmentsPage::new(MockClinicApi::new());
        let older = page.begin_load();
        let newer = page.begin_load();

        page.finish_load(
            newer,
            Ok(vec![appointment(2, 2, "Follow-up visit", AppointmentStatus::Completed)]),
        );
        page.finish_load(
            older,
            Ok(vec![appointment(1, 1, "Annual checkup", AppointmentStatus::Scheduled)]),
        );

        assert!(!page.is_loading());
        assert_eq!(page.appointments()[0].id, 2);
    }
}
