//! Grade bookkeeping for a fixed programme of semesters: letter grades per
//! course, the semester GPA and overall CGPA derived from them, and local
//! persistence of the whole state.

pub mod calculations;
pub mod catalog;
pub mod input;
pub mod models;
pub mod report;
pub mod storage;
pub mod store;

pub use calculations::{Cgpa, SemesterGpa, Stats};
pub use input::{InputError, ManualEntry};
pub use models::*;
pub use report::{ReportRow, ReportSnapshot, ReportSummary};
pub use storage::{KeyValueStore, MemoryStore, Persistence, StorageError, Theme};
pub use store::{Mutation, StateStore};
