use crate::components::table::TextTable;
use crate::models::Patient;

const HEADERS: &[&str] = &["ID", "Name", "Email", "Phone", "Date of Birth"];

/// Row actions the patient table offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientListAction {
    Edit(i64),
    Delete(i64),
}

/// Patient table. Renders whatever rows it is handed.
pub struct PatientList<'a> {
    pub patients: &'a [&'a Patient],
}

impl PatientList<'_> {
    pub fn render(&self) -> String {
        if self.patients.is_empty() {
            return "No patients\n".to_string();
        }

        let mut table = TextTable::new(HEADERS);
        for p in self.patients {
            table.push_row(vec![
                p.id.to_string(),
                p.full_name(),
                p.email.clone(),
                or_dash(p.phone.as_deref()),
                or_dash(p.date_of_birth.as_deref()),
            ]);
        }
        table.render()
    }
}

fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}
