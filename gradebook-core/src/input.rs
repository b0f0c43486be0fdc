//! Parsing and range policy for values typed in by the user.
//!
//! The aggregation engine trusts whatever the state holds. This module
//! rejects anything that isn't a number or a known grade, and clamps manual
//! entries into range before they reach the state store.

use rust_decimal::Decimal;
use thiserror::Error;

/// Highest grade point on the scale.
pub const MAX_GPA: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

/// Most credits a single semester's manual entry can carry.
pub const MAX_CREDITS: Decimal = Decimal::from_parts(999, 0, 0, false, 0);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown grade '{0}'")]
    UnknownGrade(String),

    #[error("unknown mode '{0}' (expected GPA or CGPA)")]
    UnknownMode(String),

    #[error("unknown theme '{0}' (expected dark or light)")]
    UnknownTheme(String),

    #[error("invalid {field} '{input}': not a number")]
    InvalidNumber { field: &'static str, input: String },
}

/// Trims whitespace and drops comma thousands separators.
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a numeric field. Empty or whitespace-only input is treated as 0.
pub fn parse_decimal(
    field: &'static str,
    s: &str,
) -> Result<Decimal, InputError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::warn!(field, input = %s, "invalid number: {}", e);
        InputError::InvalidNumber {
            field,
            input: s.to_string(),
        }
    })
}

/// A manual credit/GPA pair after range policy has been applied.
///
/// Credits are clamped to `0..=999` and the GPA to `0..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualEntry {
    pub credits: Decimal,
    pub gpa: Decimal,
}

impl ManualEntry {
    pub fn new(
        credits: Decimal,
        gpa: Decimal,
    ) -> Self {
        Self {
            credits: credits.clamp(Decimal::ZERO, MAX_CREDITS),
            gpa: gpa.clamp(Decimal::ZERO, MAX_GPA),
        }
    }

    /// Parses both fields with [`parse_decimal`] and applies the range policy.
    pub fn parse(
        credits: &str,
        gpa: &str,
    ) -> Result<Self, InputError> {
        let credits = parse_decimal("credits", credits)?;
        let gpa = parse_decimal("gpa", gpa)?;
        Ok(Self::new(credits, gpa))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_decimal_accepts_comma_thousands_separator() {
        assert_eq!(parse_decimal("credits", "1,234.5").unwrap(), dec!(1234.5));
    }

    #[test]
    fn parse_decimal_empty_treated_as_zero() {
        assert_eq!(parse_decimal("gpa", "").unwrap(), Decimal::ZERO);
        assert_eq!(parse_decimal("gpa", "   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_decimal_invalid_returns_error() {
        let err = parse_decimal("gpa", "abc").unwrap_err();

        assert_eq!(
            err,
            InputError::InvalidNumber {
                field: "gpa",
                input: "abc".to_string()
            }
        );
    }

    #[test]
    fn manual_entry_clamps_gpa_into_scale() {
        assert_eq!(ManualEntry::new(dec!(18), dec!(4.7)).gpa, dec!(4));
        assert_eq!(ManualEntry::new(dec!(18), dec!(-1)).gpa, dec!(0));
        assert_eq!(ManualEntry::new(dec!(18), dec!(3.625)).gpa, dec!(3.625));
    }

    #[test]
    fn manual_entry_clamps_negative_credits() {
        assert_eq!(ManualEntry::new(dec!(-3), dec!(3)).credits, dec!(0));
    }

    #[test]
    fn manual_entry_caps_credits() {
        let entry = ManualEntry::parse("30000000000000000000000000000", "4").unwrap();

        assert_eq!(entry.credits, MAX_CREDITS);
        assert_eq!(ManualEntry::new(dec!(999), dec!(3)).credits, dec!(999));
    }

    #[test]
    fn manual_entry_parse_applies_policy() {
        let entry = ManualEntry::parse(" 21 ", "9").unwrap();

        assert_eq!(entry, ManualEntry { credits: dec!(21), gpa: dec!(4) });
        assert!(ManualEntry::parse("x", "3").is_err());
    }
}
