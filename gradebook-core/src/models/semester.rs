use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Course;

/// One semester of the programme.
///
/// Semesters with a detailed course list are graded course by course in GPA
/// mode. The manual credit/GPA pair is what CGPA mode aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(
        rename = "manualCredits",
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub manual_credits: Option<Decimal>,
    #[serde(
        rename = "manualGPA",
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub manual_gpa: Option<Decimal>,
}

impl Semester {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        courses: Vec<Course>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            courses,
            manual_credits: Some(Decimal::ZERO),
            manual_gpa: Some(Decimal::ZERO),
        }
    }

    pub fn course(
        &self,
        course_id: &str,
    ) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    /// Sum of the credit weights of every course, graded or not. Saturates
    /// rather than overflowing.
    pub fn course_credits(&self) -> Decimal {
        self.courses
            .iter()
            .fold(Decimal::ZERO, |total, c| total.saturating_add(c.credits))
    }

    /// Credits shown for the semester: the course total when that is
    /// positive, the manual credit value otherwise.
    pub fn display_credits(&self) -> Decimal {
        let course_credits = self.course_credits();
        if course_credits > Decimal::ZERO {
            course_credits
        } else {
            self.manual_credits()
        }
    }

    pub fn manual_credits(&self) -> Decimal {
        self.manual_credits.unwrap_or(Decimal::ZERO)
    }

    pub fn manual_gpa(&self) -> Decimal {
        self.manual_gpa.unwrap_or(Decimal::ZERO)
    }

    pub fn has_graded_course(&self) -> bool {
        self.courses.iter().any(Course::is_graded)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::Grade;

    fn semester_with_courses() -> Semester {
        Semester::new(
            "1.1",
            "1.1",
            vec![
                Course::new("1.1-0", "NFT1101", "Basic Nutrition", dec!(3)),
                Course::new("1.1-1", "NFT1102", "Chemistry Practical", dec!(1)),
            ],
        )
    }

    #[test]
    fn display_credits_prefers_course_total() {
        let mut semester = semester_with_courses();
        semester.manual_credits = Some(dec!(20));

        assert_eq!(semester.display_credits(), dec!(4));
    }

    #[test]
    fn display_credits_falls_back_to_manual_value() {
        let mut semester = Semester::new("2.1", "2.1", Vec::new());
        assert_eq!(semester.display_credits(), dec!(0));

        semester.manual_credits = Some(dec!(18.5));
        assert_eq!(semester.display_credits(), dec!(18.5));

        semester.manual_credits = None;
        assert_eq!(semester.display_credits(), dec!(0));
    }

    #[test]
    fn has_graded_course_tracks_grades() {
        let mut semester = semester_with_courses();
        assert!(!semester.has_graded_course());

        semester.courses[1].grade = Grade::F;
        assert!(semester.has_graded_course());
    }

    #[test]
    fn deserializes_without_manual_fields() {
        let json = r#"{"id":"3.1","label":"3.1","courses":[]}"#;

        let semester: Semester = serde_json::from_str(json).unwrap();

        assert_eq!(semester.manual_credits, None);
        assert_eq!(semester.manual_gpa(), dec!(0));
    }

    #[test]
    fn deserializes_numeric_manual_fields() {
        let json = r#"{"id":"3.1","label":"3.1","courses":[],"manualCredits":21,"manualGPA":3.5}"#;

        let semester: Semester = serde_json::from_str(json).unwrap();

        assert_eq!(semester.manual_credits(), dec!(21));
        assert_eq!(semester.manual_gpa(), dec!(3.5));
    }
}
