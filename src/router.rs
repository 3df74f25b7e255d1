//! Client-side route table.
//!
//! `/` and `/patients` open the patient page, `/appointments` the
//! appointment page. Anything else has no route.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Patients,
    Appointments,
}

/// Path → page, in match order.
pub const ROUTES: &[(&str, Route)] = &[
    ("/", Route::Patients),
    ("/patients", Route::Patients),
    ("/appointments", Route::Appointments),
];

impl Route {
    /// Links shown in the top bar.
    pub const NAV: &'static [Route] = &[Route::Patients, Route::Appointments];

    /// Resolve a path. Query string and trailing slash are ignored.
    pub fn resolve(path: &str) -> Option<Route> {
        let path = path.trim();
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };

        ROUTES
            .iter()
            .find(|(p, _)| *p == normalized)
            .map(|(_, route)| *route)
    }

    /// Canonical path for this route.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Patients => "/patients",
            Route::Appointments => "/appointments",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Patients => "Patients",
            Route::Appointments => "Appointments",
        }
    }
}
