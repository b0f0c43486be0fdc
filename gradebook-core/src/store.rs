//! The state store: the single owner of [`AppState`] and the only place it
//! changes.
//!
//! Every change is one of the named [`Mutation`]s. Applying a mutation never
//! touches the previous snapshot; it builds the next one. The store then
//! hands the new snapshot to the persistence adapter. Unknown semester or
//! course ids turn a mutation into a no-op, so every operation is total.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::Stats;
use crate::models::{AppState, Grade, Mode, Semester};
use crate::storage::{KeyValueStore, Persistence, Theme};

/// The six ways the application state can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    SetGrade {
        semester_id: String,
        course_id: String,
        grade: Grade,
    },
    ResetSemesterGrades {
        semester_id: String,
    },
    SetManual {
        semester_id: String,
        credits: Decimal,
        gpa: Decimal,
    },
    ResetAllManual,
    SetMode(Mode),
    SetActiveSemester(String),
}

impl Mutation {
    /// Builds the snapshot that follows `state`.
    pub fn apply(
        &self,
        state: &AppState,
    ) -> AppState {
        match self {
            Self::SetGrade {
                semester_id,
                course_id,
                grade,
            } => map_semester(state, semester_id, |semester| {
                for course in semester.courses.iter_mut().filter(|c| c.id == *course_id) {
                    course.grade = *grade;
                }
            }),
            Self::ResetSemesterGrades { semester_id } => {
                map_semester(state, semester_id, |semester| {
                    for course in &mut semester.courses {
                        course.grade = Grade::Unset;
                    }
                })
            }
            Self::SetManual {
                semester_id,
                credits,
                gpa,
            } => map_semester(state, semester_id, |semester| {
                semester.manual_credits = Some(*credits);
                semester.manual_gpa = Some(*gpa);
            }),
            Self::ResetAllManual => AppState {
                semesters: state
                    .semesters
                    .iter()
                    .map(|s| Semester {
                        manual_credits: Some(Decimal::ZERO),
                        manual_gpa: Some(Decimal::ZERO),
                        ..s.clone()
                    })
                    .collect(),
                ..state.clone()
            },
            Self::SetMode(mode) => AppState {
                mode: *mode,
                ..state.clone()
            },
            Self::SetActiveSemester(semester_id) => AppState {
                active_semester_id: semester_id.clone(),
                ..state.clone()
            },
        }
    }
}

/// Copies `state`, running `change` on the semester whose id matches.
fn map_semester(
    state: &AppState,
    semester_id: &str,
    change: impl Fn(&mut Semester),
) -> AppState {
    let semesters = state
        .semesters
        .iter()
        .map(|s| {
            let mut next = s.clone();
            if next.id == semester_id {
                change(&mut next);
            }
            next
        })
        .collect();

    AppState {
        semesters,
        ..state.clone()
    }
}

/// Owns the current snapshot and persists every change.
pub struct StateStore<S> {
    state: AppState,
    persistence: Persistence<S>,
}

impl<S: KeyValueStore> StateStore<S> {
    /// Restores the saved state (or the seeded default) from `storage`.
    pub fn open(storage: S) -> Self {
        Self::with_persistence(Persistence::new(storage))
    }

    /// Like [`StateStore::open`], with an already configured adapter.
    ///
    /// The starting state is written back right away, so storage always
    /// carries the running version tag.
    pub fn with_persistence(mut persistence: Persistence<S>) -> Self {
        let state = persistence.load_state();
        persistence.save_state(&state);
        Self { state, persistence }
    }

    /// The current snapshot.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Scorecard for the current snapshot.
    pub fn stats(&self) -> Stats {
        Stats::calculate(&self.state)
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    pub fn into_persistence(self) -> Persistence<S> {
        self.persistence
    }

    /// Applies `mutation`, stores the resulting snapshot and persists it.
    pub fn dispatch(
        &mut self,
        mutation: Mutation,
    ) -> &AppState {
        debug!(?mutation, "applying mutation");
        self.state = mutation.apply(&self.state);
        self.persistence.save_state(&self.state);
        &self.state
    }

    pub fn set_grade(
        &mut self,
        semester_id: &str,
        course_id: &str,
        grade: Grade,
    ) -> &AppState {
        self.dispatch(Mutation::SetGrade {
            semester_id: semester_id.to_string(),
            course_id: course_id.to_string(),
            grade,
        })
    }

    pub fn reset_semester_grades(
        &mut self,
        semester_id: &str,
    ) -> &AppState {
        self.dispatch(Mutation::ResetSemesterGrades {
            semester_id: semester_id.to_string(),
        })
    }

    pub fn set_manual(
        &mut self,
        semester_id: &str,
        credits: Decimal,
        gpa: Decimal,
    ) -> &AppState {
        self.dispatch(Mutation::SetManual {
            semester_id: semester_id.to_string(),
            credits,
            gpa,
        })
    }

    pub fn reset_all_manual(&mut self) -> &AppState {
        self.dispatch(Mutation::ResetAllManual)
    }

    pub fn set_mode(
        &mut self,
        mode: Mode,
    ) -> &AppState {
        self.dispatch(Mutation::SetMode(mode))
    }

    pub fn set_active_semester(
        &mut self,
        semester_id: &str,
    ) -> &AppState {
        self.dispatch(Mutation::SetActiveSemester(semester_id.to_string()))
    }

    /// Stored theme, falling back to `system`.
    pub fn theme(
        &self,
        system: Theme,
    ) -> Theme {
        self.persistence.load_theme(system)
    }

    pub fn set_theme(
        &mut self,
        theme: Theme,
    ) {
        self.persistence.save_theme(theme);
    }
}
