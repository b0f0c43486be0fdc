use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::input::InputError;

/// Which aggregate the calculator is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Course-by-course GPA of the active semester.
    #[default]
    #[serde(rename = "GPA")]
    Gpa,
    /// Credit-weighted CGPA over the manual per-semester entries.
    #[serde(rename = "CGPA")]
    Cgpa,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gpa => "GPA",
            Self::Cgpa => "CGPA",
        }
    }

    /// Case-insensitive parse of `GPA` / `CGPA`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GPA" => Some(Self::Gpa),
            "CGPA" => Some(Self::Cgpa),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InputError::UnknownMode(s.to_string()))
    }
}
