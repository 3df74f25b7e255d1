//! Navigation shell.
//!
//! Owns the active route and its page controller, renders the layout around
//! it and dispatches console commands. Navigating always builds a fresh
//! page, so nothing fetched survives a route change.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::api::{AppointmentApi, PatientApi};
use crate::components::{AppointmentListAction, Layout, PatientListAction};
use crate::console::{joined, Command, FilterCommand, StatusChoice};
use crate::pages::{AppointmentsPage, PatientsPage};
use crate::router::Route;

fn unavailable(verb: &str, route: Route) -> String {
    format!("`{verb}` is not available on {}", route.title())
}

enum ActivePage<A> {
    Patients(PatientsPage<A>),
    Appointments(AppointmentsPage<A>),
}

/// What the input loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<A> {
    api: A,
    route: Route,
    page: ActivePage<A>,
    /// One-line feedback for the last command.
    notice: Option<String>,
}

impl<A> Shell<A>
where
    A: PatientApi + AppointmentApi + Clone,
{
    /// Shell on the index route. Nothing is fetched until `start`.
    pub fn new(api: A) -> Self {
        let page = ActivePage::Patients(PatientsPage::new(api.clone()));
        Self {
            api,
            route: Route::Patients,
            page,
            notice: None,
        }
    }

    pub async fn start(&mut self) {
        self.navigate("/").await;
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Switch to the page for `path` and mount it. Unknown paths leave the
    /// current page in place.
    pub async fn navigate(&mut self, path: &str) -> bool {
        let Some(route) = Route::resolve(path) else {
            tracing::debug!(path, "No route");
            self.notice = Some(format!("No route matches {path}"));
            return false;
        };

        tracing::info!(path = route.path(), "Navigating");
        self.route = route;
        self.page = match route {
            Route::Patients => {
                let mut page = PatientsPage::new(self.api.clone());
                page.mount().await;
                ActivePage::Patients(page)
            }
            Route::Appointments => {
                let mut page = AppointmentsPage::new(self.api.clone());
                page.mount().await;
                ActivePage::Appointments(page)
            }
        };
        true
    }

    pub async fn dispatch(&mut self, command: Command) -> Flow {
        self.notice = None;

        let command = match command {
            Command::Quit => return Flow::Quit,
            Command::Go { path } => {
                self.navigate(&path).await;
                return Flow::Continue;
            }
            other => other,
        };
        let verb = command.verb();

        match (command, &mut self.page) {
            (Command::Reload, ActivePage::Patients(page)) => page.load().await,
            (Command::Reload, ActivePage::Appointments(page)) => page.load().await,

            (Command::Set { field, value }, ActivePage::Patients(page)) => {
                if let Err(e) = page.form_mut().set_field(&field, &joined(&value)) {
                    self.notice = Some(e.to_string());
                }
            }
            (Command::Set { field, value }, ActivePage::Appointments(page)) => {
                if let Err(e) = page.form_mut().set_field(&field, &joined(&value)) {
                    self.notice = Some(e.to_string());
                }
            }
            (Command::Submit, ActivePage::Patients(page)) => {
                if let Err(e) = page.submit_form().await {
                    self.notice = Some(e.to_string());
                }
            }
            (Command::Submit, ActivePage::Appointments(page)) => {
                if let Err(e) = page.submit_form().await {
                    self.notice = Some(e.to_string());
                }
            }
            (Command::Delete { id }, ActivePage::Patients(page)) => {
                page.handle(PatientListAction::Delete(id)).await;
            }
            (Command::Delete { id }, ActivePage::Appointments(page)) => {
                page.handle(AppointmentListAction::Delete(id)).await;
            }

            (Command::Filter { which }, ActivePage::Patients(page)) => match which {
                FilterCommand::Name { text } => page.set_name_filter(&joined(&text)),
                FilterCommand::Email { text } => page.set_email_filter(&joined(&text)),
                _ => self.notice = Some(unavailable(verb, self.route)),
            },
            (Command::Edit { id }, ActivePage::Patients(page)) => {
                if !page.handle(PatientListAction::Edit(id)).await {
                    self.notice = Some(format!("No loaded patient with id {id}"));
                }
            }
            (Command::Cancel, ActivePage::Patients(page)) => page.cancel_edit(),

            (Command::Filter { which }, ActivePage::Appointments(page)) => match which {
                FilterCommand::Reason { text } => page.set_reason_filter(&joined(&text)),
                FilterCommand::Status { status } => {
                    page.set_status_filter(status.and_then(StatusChoice::status))
                }
                FilterCommand::Patient { id } => {
                    page.set_patient_filter_draft(id.as_deref().unwrap_or_default())
                }
                _ => self.notice = Some(unavailable(verb, self.route)),
            },
            (Command::Apply, ActivePage::Appointments(page)) => page.apply_patient_filter().await,
            (Command::ClearPatient, ActivePage::Appointments(page)) => {
                page.clear_patient_filter().await
            }
            (Command::Status { id, status }, ActivePage::Appointments(page)) => {
                page.handle(AppointmentListAction::StatusChange(id, status))
                    .await
            }

            _ => self.notice = Some(unavailable(verb, self.route)),
        }
        Flow::Continue
    }

    pub fn render(&self) -> String {
        let content = match &self.page {
            ActivePage::Patients(page) => page.render(),
            ActivePage::Appointments(page) => page.render(),
        };
        let mut out = Layout { active: self.route }.render(&content);
        if let Some(notice) = &self.notice {
            out.push_str(&format!("\n» {notice}\n"));
        }
        out
    }

    /// Read commands line by line, re-rendering after each, until `quit`
    /// or end of input.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        self.start().await;
        output.write_all(self.render().as_bytes()).await?;
        output.write_all(b"\n> ").await?;
        output.flush().await?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                output.write_all(b"> ").await?;
                output.flush().await?;
                continue;
            }
            match line.parse::<Command>() {
                Ok(command) => {
                    if self.dispatch(command).await == Flow::Quit {
                        break;
                    }
                }
                Err(e) => self.notice = Some(e.to_string().trim_end().to_string()),
            }
            output.write_all(self.render().as_bytes()).await?;
            output.write_all(b"\n> ").await?;
            output.flush().await?;
        }
        Ok(())
    }
}
