use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Grade;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub code: String,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub credits: Decimal,
    #[serde(default)]
    pub grade: Grade,
}

impl Course {
    /// Creates an ungraded course.
    pub fn new(
        id: impl Into<String>,
        code: impl Into<String>,
        title: impl Into<String>,
        credits: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            title: title.into(),
            credits,
            grade: Grade::Unset,
        }
    }

    pub fn is_graded(&self) -> bool {
        self.grade.is_set()
    }

    /// Weighted points earned, or `None` while ungraded. Saturates rather
    /// than overflowing.
    pub fn points(&self) -> Option<Decimal> {
        self.is_graded()
            .then(|| self.grade.point().saturating_mul(self.credits))
    }
}
