//! First-run seed data: the semesters of the programme and the courses of
//! the semesters that have a published course list.

use rust_decimal::Decimal;

use crate::models::{Course, Semester};

/// Semester labels in programme order. Each label doubles as the semester id.
pub const SEMESTER_LABELS: [&str; 8] = ["1.1", "1.2", "2.1", "2.2", "3.1", "3.2", "4.1", "4.2"];

struct SeedCourse {
    code: &'static str,
    title: &'static str,
    credits: i64,
}

const SEMESTER_1_1: &[SeedCourse] = &[
    SeedCourse { code: "0915 09 NFT1101", title: "Basic Nutrition", credits: 3 },
    SeedCourse { code: "0531 09 NFT1102", title: "Fundamental Chemistry Practical", credits: 1 },
    SeedCourse { code: "0531 09 NFT1103", title: "Inorganic and Physical Chemistry", credits: 3 },
    SeedCourse { code: "0512 09 NFT1104", title: "Food Chemistry Practical", credits: 1 },
    SeedCourse { code: "0512 09 NFT 1105", title: "Food Chemistry", credits: 3 },
    SeedCourse { code: "0611 09 NFT 1106", title: "Computer Fundamental Practical", credits: 1 },
    SeedCourse { code: "0611 09 NFT 1109", title: "Computer Fundamentals", credits: 2 },
    SeedCourse { code: "0912 09 NFT 1107", title: "Human Anatomy and Physiology-I", credits: 3 },
    SeedCourse { code: "0231 09 NFT 1111", title: "Communicative English", credits: 2 },
];

fn seed_courses(label: &str) -> &'static [SeedCourse] {
    match label {
        "1.1" => SEMESTER_1_1,
        _ => &[],
    }
}

/// Ungraded courses for `label`, with ids of the form `<label>-<index>`.
pub fn initial_courses(label: &str) -> Vec<Course> {
    seed_courses(label)
        .iter()
        .enumerate()
        .map(|(i, c)| Course::new(format!("{label}-{i}"), c.code, c.title, Decimal::from(c.credits)))
        .collect()
}

/// Every semester of the catalog with zeroed manual entries.
pub fn initial_semesters() -> Vec<Semester> {
    SEMESTER_LABELS
        .iter()
        .map(|label| Semester::new(*label, *label, initial_courses(label)))
        .collect()
}
