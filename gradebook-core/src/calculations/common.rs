//! Shared helpers for the aggregation engine.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places a semester GPA is displayed with.
pub const GPA_PLACES: u32 = 3;

/// Decimal places the overall CGPA is displayed with.
pub const CGPA_PLACES: u32 = 2;

/// Decimal places credit and point totals are shown with on a report.
pub const REPORT_PLACES: u32 = 2;

/// Formats `value` with exactly `places` decimal places.
///
/// Rounding happens here and only here: half-way values round away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use gradebook_core::calculations::common::format_fixed;
///
/// assert_eq!(format_fixed(dec!(2.25), 3), "2.250");
/// assert_eq!(format_fixed(dec!(3.4567), 2), "3.46");
/// assert_eq!(format_fixed(dec!(0), 2), "0.00");
/// ```
pub fn format_fixed(
    value: Decimal,
    places: u32,
) -> String {
    let rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", places as usize, rounded)
}

/// `numerator / denominator`, or zero when the denominator is not positive
/// or the quotient does not fit.
pub fn weighted_average(
    numerator: Decimal,
    denominator: Decimal,
) -> Decimal {
    if denominator > Decimal::ZERO {
        numerator.checked_div(denominator).unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    }
}

/// Sum of `values`, or `None` on overflow.
pub fn checked_sum(values: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    values.into_iter().try_fold(Decimal::ZERO, Decimal::checked_add)
}
