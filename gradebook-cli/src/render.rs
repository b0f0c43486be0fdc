//! Plain-text rendering of the scorecard, the course list and the report.

use std::fmt::Write;

use gradebook_core::calculations::common::{GPA_PLACES, REPORT_PLACES, format_fixed};
use gradebook_core::{AppState, Mode, ReportSnapshot, ReportSummary, Stats};
use rust_decimal::Decimal;

fn figure(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Heading, score and the two labelled totals.
pub fn scorecard(stats: &Stats) -> String {
    format!(
        "{}\n  {}\n  {}: {}  |  {}: {}\n",
        stats.heading,
        stats.score,
        stats.offered_label,
        figure(stats.offered),
        stats.secured_label,
        figure(stats.secured),
    )
}

/// What the current mode is editing: the active semester's courses in GPA
/// mode, every semester's manual entry in CGPA mode.
pub fn listing(state: &AppState) -> String {
    let mut out = String::new();
    match state.mode {
        Mode::Gpa => {
            let _ = writeln!(out, "Semesters: {}", state.semester_ids().join("  "));
            match state.active_semester() {
                Some(semester) if !semester.courses.is_empty() => {
                    for course in &semester.courses {
                        let _ = writeln!(
                            out,
                            "  {:<8} {:<18} {:>4} cr  {:<4} {}",
                            course.id,
                            course.code,
                            figure(course.credits),
                            course.grade.to_string(),
                            course.title
                        );
                    }
                }
                _ => {
                    let _ = writeln!(
                        out,
                        "  No course info available for semester {}",
                        state.active_semester_id
                    );
                }
            }
        }
        Mode::Cgpa => {
            for semester in &state.semesters {
                let _ = writeln!(
                    out,
                    "  Semester {:<6} {:>7} credits  GPA {}",
                    semester.label,
                    format_fixed(semester.display_credits(), REPORT_PLACES),
                    format_fixed(semester.manual_gpa(), GPA_PLACES)
                );
            }
        }
    }
    out
}

pub fn report(snapshot: &ReportSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", snapshot.title);
    let _ = writeln!(out, "File: {}", snapshot.file_name);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<20} {:<34} {:>7} {:>6} {:>7}",
        "Course Code", "Course Name", "Credits", "Grade", "Points"
    );
    for row in &snapshot.rows {
        let _ = writeln!(
            out,
            "{:<20} {:<34} {:>7} {:>6} {:>7}",
            row.code, row.name, row.credits, row.grade, row.points
        );
    }
    let _ = writeln!(out);
    match &snapshot.summary {
        ReportSummary::Semester {
            offered,
            attempted,
            secured,
            points,
        } => {
            let _ = writeln!(out, "Credit Offered:   {offered}");
            let _ = writeln!(out, "Credit Attempted: {attempted}");
            let _ = writeln!(out, "Credit Secured:   {secured}");
            let _ = writeln!(out, "Points Secured:   {points}");
        }
        ReportSummary::Cumulative {
            total_credits,
            semesters_counted,
        } => {
            let _ = writeln!(out, "Total Credits:     {total_credits}");
            let _ = writeln!(out, "Semesters Counted: {semesters_counted}");
        }
    }
    let _ = writeln!(out, "{} {}", snapshot.mode, snapshot.score);
    out
}

#[cfg(test)]
mod tests {
    use gradebook_core::Grade;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn scorecard_shows_labels_and_totals() {
        let mut state = AppState::seeded();
        state.semesters[0].courses[0].grade = Grade::APlus;

        let text = scorecard(&Stats::calculate(&state));

        assert_eq!(
            text,
            "SEMESTER 1.1 GPA\n  4.000\n  Credit Offered: 19  |  Credit Secured: 3\n"
        );
    }

    #[test]
    fn listing_for_semester_without_courses() {
        let state = AppState {
            active_semester_id: "2.1".to_string(),
            ..AppState::seeded()
        };

        let text = listing(&state);

        assert!(text.contains("No course info available for semester 2.1"));
    }

    #[test]
    fn listing_in_cgpa_mode_shows_display_credits() {
        let mut state = AppState {
            mode: Mode::Cgpa,
            ..AppState::seeded()
        };
        state.semesters[1].manual_credits = Some(dec!(21));

        let text = listing(&state);

        assert_eq!(text.lines().count(), 8);
        assert!(text.lines().next().unwrap().contains("19.00 credits"));
        assert!(text.lines().nth(1).unwrap().contains("21.00 credits"));
    }

    #[test]
    fn report_ends_with_mode_and_score() {
        let mut state = AppState {
            mode: Mode::Cgpa,
            ..AppState::seeded()
        };
        state.semesters[0].manual_credits = Some(dec!(19));
        state.semesters[0].manual_gpa = Some(dec!(3.5));

        let text = report(&ReportSnapshot::build(&state));

        assert!(text.starts_with("CGPA Summary Report\n"));
        assert!(text.contains("Semesters Counted: 1"));
        assert!(text.trim_end().ends_with("CGPA 3.50"));
    }

    #[test]
    fn listing_in_cgpa_mode_shows_gpa_to_three_places() {
        let mut state = AppState {
            mode: Mode::Cgpa,
            ..AppState::seeded()
        };
        state.semesters[0].manual_gpa = Some(dec!(3.5));

        let text = listing(&state);

        assert!(text.lines().next().unwrap().ends_with("GPA 3.500"));
    }
}
