//! Read-only snapshot handed to whatever renders the printable report.
//!
//! In GPA mode the report lists the active semester course by course. In
//! CGPA mode it lists every semester that counts toward the CGPA. Figures
//! arrive already formatted; rendering them is the caller's concern.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use crate::calculations::common::{CGPA_PLACES, REPORT_PLACES, format_fixed};
use crate::calculations::{Stats, counts_toward_cgpa};
use crate::models::{AppState, Course, Mode, Semester};

const NOT_AVAILABLE: &str = "N/A";

/// Totals block at the foot of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ReportSummary {
    Semester {
        offered: String,
        attempted: String,
        secured: String,
        points: String,
    },
    Cumulative {
        total_credits: String,
        semesters_counted: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub code: String,
    pub name: String,
    pub credits: String,
    pub grade: String,
    pub points: String,
}

impl ReportRow {
    fn course(course: &Course) -> Self {
        Self {
            code: course.code.clone(),
            name: course.title.clone(),
            credits: course.credits.normalize().to_string(),
            grade: course.grade.to_string(),
            points: course
                .points()
                .map_or_else(|| NOT_AVAILABLE.to_string(), |p| format_fixed(p, REPORT_PLACES)),
        }
    }

    fn semester(semester: &Semester) -> Self {
        let credits = semester.manual_credits();
        let gpa = semester.manual_gpa();
        let points = credits.checked_mul(gpa).unwrap_or_else(|| {
            warn!(semester = %semester.id, "semester points overflow, reporting zero");
            Decimal::ZERO
        });
        Self {
            code: format!("Semester {}", semester.label),
            name: "Overall Semester Summary".to_string(),
            credits: credits.normalize().to_string(),
            grade: format_fixed(gpa, CGPA_PLACES),
            points: format_fixed(points, REPORT_PLACES),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSnapshot {
    pub mode: Mode,
    pub title: String,
    pub file_name: String,
    pub rows: Vec<ReportRow>,
    pub summary: ReportSummary,
    pub score: String,
    /// Whether there is anything worth exporting yet.
    pub exportable: bool,
}

impl ReportSnapshot {
    pub fn build(state: &AppState) -> Self {
        let stats = Stats::calculate(state);
        match state.mode {
            Mode::Gpa => Self::semester_report(state, stats),
            Mode::Cgpa => Self::cumulative_report(state, stats),
        }
    }

    fn semester_report(
        state: &AppState,
        stats: Stats,
    ) -> Self {
        let active = state.active_semester();
        let label = active.map_or(state.active_semester_id.as_str(), |s| s.label.as_str());
        let courses = active.map_or(&[][..], |s| s.courses.as_slice());

        let attempted = courses
            .iter()
            .filter(|c| c.is_graded())
            .fold(Decimal::ZERO, |total, c| total.saturating_add(c.credits));
        let points = courses
            .iter()
            .filter_map(Course::points)
            .fold(Decimal::ZERO, Decimal::saturating_add);

        Self {
            mode: Mode::Gpa,
            title: format!("Semester: {label}"),
            file_name: format!(
                "GPA_Report_Semester_{}.pdf",
                active.map_or("Result", |s| s.label.as_str())
            ),
            rows: courses.iter().map(ReportRow::course).collect(),
            summary: ReportSummary::Semester {
                offered: format_fixed(stats.offered, REPORT_PLACES),
                attempted: format_fixed(attempted, REPORT_PLACES),
                secured: format_fixed(stats.secured, REPORT_PLACES),
                points: format_fixed(points, REPORT_PLACES),
            },
            score: stats.score,
            exportable: active.is_some_and(Semester::has_graded_course),
        }
    }

    fn cumulative_report(
        state: &AppState,
        stats: Stats,
    ) -> Self {
        let counted: Vec<&Semester> = state
            .semesters
            .iter()
            .filter(|s| counts_toward_cgpa(s))
            .collect();

        Self {
            mode: Mode::Cgpa,
            title: "CGPA Summary Report".to_string(),
            file_name: "CGPA_Summary_Report.pdf".to_string(),
            rows: counted.iter().map(|s| ReportRow::semester(s)).collect(),
            summary: ReportSummary::Cumulative {
                total_credits: format_fixed(stats.offered, REPORT_PLACES),
                semesters_counted: counted.len(),
            },
            score: stats.score,
            exportable: counted.iter().any(|s| s.manual_gpa() > Decimal::ZERO),
        }
    }
}
