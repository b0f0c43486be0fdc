//! Cumulative GPA over the manual per-semester entries.
//!
//! Only semesters whose manual credit total is positive take part; the rest
//! are skipped outright, whatever GPA they carry.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use super::common::{CGPA_PLACES, format_fixed, weighted_average};
use crate::models::Semester;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Cgpa {
    pub points: Decimal,
    pub total_credits: Decimal,
    pub counted_semesters: usize,
}

impl Cgpa {
    /// Totals over the counted semesters. Totals too large for a `Decimal`
    /// give the zeroed result.
    pub fn calculate(semesters: &[Semester]) -> Self {
        Self::try_calculate(semesters).unwrap_or_else(|| {
            warn!("CGPA totals overflow, using zeroed result");
            Self::default()
        })
    }

    fn try_calculate(semesters: &[Semester]) -> Option<Self> {
        semesters
            .iter()
            .filter(|s| counts_toward_cgpa(s))
            .try_fold(Self::default(), |acc, s| {
                let credits = s.manual_credits();
                Some(Self {
                    points: acc.points.checked_add(s.manual_gpa().checked_mul(credits)?)?,
                    total_credits: acc.total_credits.checked_add(credits)?,
                    counted_semesters: acc.counted_semesters + 1,
                })
            })
    }

    pub fn cgpa(&self) -> Decimal {
        weighted_average(self.points, self.total_credits)
    }

    /// CGPA formatted to two decimal places.
    pub fn score(&self) -> String {
        format_fixed(self.cgpa(), CGPA_PLACES)
    }
}

/// A semester contributes only when its manual credit total is positive.
pub fn counts_toward_cgpa(semester: &Semester) -> bool {
    semester.manual_credits() > Decimal::ZERO
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn manual(
        id: &str,
        credits: Option<Decimal>,
        gpa: Option<Decimal>,
    ) -> Semester {
        Semester {
            manual_credits: credits,
            manual_gpa: gpa,
            ..Semester::new(id, id, Vec::new())
        }
    }

    #[test]
    fn zero_credit_semester_is_excluded() {
        let result = Cgpa::calculate(&[
            manual("1.1", Some(dec!(3)), Some(dec!(3.50))),
            manual("1.2", Some(dec!(0)), Some(dec!(4.00))),
        ]);

        assert_eq!(result.total_credits, dec!(3));
        assert_eq!(result.counted_semesters, 1);
        assert_eq!(result.score(), "3.50");
    }

    #[test]
    fn nothing_counted_is_zero() {
        let result = Cgpa::calculate(&[
            manual("1.1", Some(dec!(0)), Some(dec!(3))),
            manual("1.2", None, None),
        ]);

        assert_eq!(result, Cgpa::default());
        assert_eq!(result.score(), "0.00");
    }

    #[test]
    fn excluded_semester_gpa_has_no_effect() {
        let base = vec![manual("1.1", Some(dec!(20)), Some(dec!(3.25)))];
        let mut with_outlier = base.clone();
        with_outlier.push(manual("1.2", Some(dec!(-5)), Some(dec!(1000000))));
        with_outlier.push(manual("2.1", None, Some(dec!(99))));

        assert_eq!(Cgpa::calculate(&base), Cgpa::calculate(&with_outlier));
    }

    #[test]
    fn weights_by_credits() {
        let result = Cgpa::calculate(&[
            manual("1.1", Some(dec!(20)), Some(dec!(3.00))),
            manual("1.2", Some(dec!(10)), Some(dec!(4.00))),
        ]);

        assert_eq!(result.points, dec!(100.00));
        assert_eq!(result.score(), "3.33");
        assert_eq!(result.counted_semesters, 2);
    }

    #[test]
    fn missing_gpa_counts_as_zero() {
        let result = Cgpa::calculate(&[
            manual("1.1", Some(dec!(10)), None),
            manual("1.2", Some(dec!(10)), Some(dec!(4))),
        ]);

        assert_eq!(result.score(), "2.00");
    }

    #[test]
    fn out_of_range_gpa_passes_through() {
        let result = Cgpa::calculate(&[manual("1.1", Some(dec!(3)), Some(dec!(5)))]);

        assert_eq!(result.score(), "5.00");
    }

    #[test]
    fn overflowing_manual_credits_give_zeroed_result() {
        let huge: Decimal = "30000000000000000000000000000".parse().unwrap();
        let result = Cgpa::calculate(&[
            manual("1.1", Some(dec!(20)), Some(dec!(3.5))),
            manual("2.1", Some(huge), Some(dec!(4))),
        ]);

        assert_eq!(result, Cgpa::default());
        assert_eq!(result.score(), "0.00");
    }
}
