use serde::{Deserialize, Serialize};

use super::{Mode, Semester};
use crate::catalog;

/// Everything the calculator persists between sessions.
///
/// The semester list is seeded once; only the values inside it change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub mode: Mode,
    pub semesters: Vec<Semester>,
    pub active_semester_id: String,
}

impl AppState {
    /// The first-run state: every catalog semester, GPA mode, first semester active.
    pub fn seeded() -> Self {
        let semesters = catalog::initial_semesters();
        let active_semester_id = semesters
            .first()
            .map(|s| s.id.clone())
            .unwrap_or_default();

        Self {
            mode: Mode::Gpa,
            semesters,
            active_semester_id,
        }
    }

    pub fn semester(
        &self,
        semester_id: &str,
    ) -> Option<&Semester> {
        self.semesters.iter().find(|s| s.id == semester_id)
    }

    /// The semester GPA mode targets, if the id still resolves.
    pub fn active_semester(&self) -> Option<&Semester> {
        self.semester(&self.active_semester_id)
    }

    /// Ids of every semester, in order.
    pub fn semester_ids(&self) -> Vec<&str> {
        self.semesters.iter().map(|s| s.id.as_str()).collect()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::seeded()
    }
}
