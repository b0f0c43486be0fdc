//! The scorecard: whichever aggregate the current mode selects, with the
//! labels a front-end shows next to the two totals.

use rust_decimal::Decimal;
use serde::Serialize;

use super::{Cgpa, SemesterGpa};
use crate::models::{AppState, Mode};

pub const CREDIT_OFFERED_LABEL: &str = "Credit Offered";
pub const CREDIT_SECURED_LABEL: &str = "Credit Secured";
pub const TOTAL_CREDIT_LABEL: &str = "Total Credit";
pub const TOTAL_SEMESTER_LABEL: &str = "Total Semester";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub heading: String,
    pub score: String,
    pub offered: Decimal,
    pub secured: Decimal,
    pub offered_label: &'static str,
    pub secured_label: &'static str,
}

impl Stats {
    /// Recomputes the scorecard for `state`.
    ///
    /// In GPA mode an active id that matches no semester yields a zeroed card.
    pub fn calculate(state: &AppState) -> Self {
        match state.mode {
            Mode::Gpa => {
                let result = state
                    .active_semester()
                    .map_or_else(SemesterGpa::empty, SemesterGpa::calculate);
                Self::semester(&state.active_semester_id, &result)
            }
            Mode::Cgpa => Self::cumulative(&Cgpa::calculate(&state.semesters)),
        }
    }

    fn semester(
        semester_id: &str,
        result: &SemesterGpa,
    ) -> Self {
        Self {
            heading: format!("SEMESTER {semester_id} GPA"),
            score: result.score(),
            offered: result.offered,
            secured: result.secured,
            offered_label: CREDIT_OFFERED_LABEL,
            secured_label: CREDIT_SECURED_LABEL,
        }
    }

    fn cumulative(result: &Cgpa) -> Self {
        Self {
            heading: "OVERALL CGPA".to_string(),
            score: result.score(),
            offered: result.total_credits,
            secured: Decimal::from(result.counted_semesters),
            offered_label: TOTAL_CREDIT_LABEL,
            secured_label: TOTAL_SEMESTER_LABEL,
        }
    }
}
