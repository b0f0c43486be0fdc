//! Aggregation engine: semester GPA, overall CGPA and the scorecard built
//! from them. Everything here is a pure function of the state.

pub mod cgpa;
pub mod common;
pub mod gpa;
pub mod stats;

pub use cgpa::{Cgpa, counts_toward_cgpa};
pub use gpa::SemesterGpa;
pub use stats::Stats;
