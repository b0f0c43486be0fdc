mod app_state;
mod course;
mod grade;
mod mode;
mod semester;

pub use app_state::AppState;
pub use course::Course;
pub use grade::{GRADE_POINTS, Grade};
pub use mode::Mode;
pub use semester::Semester;
