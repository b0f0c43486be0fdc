//! Credit-weighted GPA of a single semester.
//!
//! | Quantity | Definition |
//! |----------|------------|
//! | offered  | sum of credits over every course |
//! | points   | sum of `grade point × credits` over graded courses |
//! | secured  | sum of credits over graded courses |
//! | GPA      | `points / secured`, or 0 when nothing is graded |

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use super::common::{GPA_PLACES, checked_sum, format_fixed, weighted_average};
use crate::models::Semester;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SemesterGpa {
    pub offered: Decimal,
    pub points: Decimal,
    pub secured: Decimal,
}

impl SemesterGpa {
    /// Totals for `semester`. Totals too large for a `Decimal` give the
    /// zeroed result.
    pub fn calculate(semester: &Semester) -> Self {
        Self::try_calculate(semester).unwrap_or_else(|| {
            warn!(semester = %semester.id, "semester totals overflow, using zeroed result");
            Self::empty()
        })
    }

    fn try_calculate(semester: &Semester) -> Option<Self> {
        let offered = checked_sum(semester.courses.iter().map(|c| c.credits))?;

        let mut points = Decimal::ZERO;
        let mut secured = Decimal::ZERO;
        for course in semester.courses.iter().filter(|c| c.is_graded()) {
            points = points.checked_add(course.grade.point().checked_mul(course.credits)?)?;
            secured = secured.checked_add(course.credits)?;
        }

        Some(Self {
            offered,
            points,
            secured,
        })
    }

    /// Zeroed result for a semester id that does not resolve.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn gpa(&self) -> Decimal {
        weighted_average(self.points, self.secured)
    }

    /// GPA formatted to three decimal places.
    pub fn score(&self) -> String {
        format_fixed(self.gpa(), GPA_PLACES)
    }
}
