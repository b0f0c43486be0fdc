use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::input::InputError;

/// A letter grade, or [`Grade::Unset`] for a course that has not been graded.
///
/// The serialized form is the letter itself (`"A+"`, `"B-"`, ...) and the
/// empty string for `Unset`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "F")]
    F,
    #[default]
    #[serde(rename = "")]
    Unset,
}

const fn hundredths(value: u32) -> Decimal {
    Decimal::from_parts(value, 0, 0, false, 2)
}

/// Grade point value of every grade, highest first.
pub const GRADE_POINTS: [(Grade, Decimal); 11] = [
    (Grade::APlus, hundredths(400)),
    (Grade::A, hundredths(375)),
    (Grade::AMinus, hundredths(350)),
    (Grade::BPlus, hundredths(325)),
    (Grade::B, hundredths(300)),
    (Grade::BMinus, hundredths(275)),
    (Grade::CPlus, hundredths(250)),
    (Grade::C, hundredths(225)),
    (Grade::D, hundredths(200)),
    (Grade::F, hundredths(0)),
    (Grade::Unset, hundredths(0)),
];

impl Grade {
    /// Every assignable letter grade, in the order a grade picker lists them.
    pub const LETTERS: [Grade; 10] = [
        Grade::APlus,
        Grade::A,
        Grade::AMinus,
        Grade::BPlus,
        Grade::B,
        Grade::BMinus,
        Grade::CPlus,
        Grade::C,
        Grade::D,
        Grade::F,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
            Self::Unset => "",
        }
    }

    /// Parses a letter grade. The empty string and `N/A` mean [`Grade::Unset`].
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "A+" => Some(Self::APlus),
            "A" => Some(Self::A),
            "A-" => Some(Self::AMinus),
            "B+" => Some(Self::BPlus),
            "B" => Some(Self::B),
            "B-" => Some(Self::BMinus),
            "C+" => Some(Self::CPlus),
            "C" => Some(Self::C),
            "D" => Some(Self::D),
            "F" => Some(Self::F),
            "" | "N/A" | "n/a" => Some(Self::Unset),
            _ => None,
        }
    }

    /// Grade point value from [`GRADE_POINTS`].
    pub fn point(&self) -> Decimal {
        GRADE_POINTS
            .iter()
            .find(|(grade, _)| grade == self)
            .map_or(Decimal::ZERO, |(_, point)| *point)
    }

    pub fn is_set(&self) -> bool {
        *self != Self::Unset
    }
}

impl fmt::Display for Grade {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("N/A"),
            other => f.write_str(other.as_str()),
        }
    }
}

impl FromStr for Grade {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InputError::UnknownGrade(s.to_string()))
    }
}
