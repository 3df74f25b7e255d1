use crate::router::Route;

const TITLE: &str = "Patient Management";

/// Top bar with navigation links, followed by the routed page.
pub struct Layout {
    pub active: Route,
}

impl Layout {
    pub fn top_bar(&self) -> String {
        let links: Vec<String> = Route::NAV
            .iter()
            .map(|route| {
                if *route == self.active {
                    format!("[{}]", route.title())
                } else {
                    route.title().to_string()
                }
            })
            .collect();
        format!("{TITLE}    {}", links.join("  "))
    }

    pub fn render(&self, outlet: &str) -> String {
        let bar = self.top_bar();
        let rule = "=".repeat(bar.chars().count());
        format!("{bar}\n{rule}\n\n{outlet}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_active_link() {
        let bar = Layout {
            active: Route::Appointments,
        }
        .top_bar();
        assert_eq!(bar, "Patient Management    Patients  [Appointments]");
    }

    #[test]
    fn wraps_outlet_under_bar() {
        let rendered = Layout {
            active: Route::Patients,
        }
        .render("Patients\n");
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[0].contains("[Patients]"));
        assert!(lines[1].chars().all(|c| c == '='));
        assert_eq!(lines[3], "Patients");
    }
}
