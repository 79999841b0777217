//! Social-security contribution calculation.
//!
//! The contribution is a flat share of the gross salary, withheld before
//! any tax is computed.

use rust_decimal::Decimal;

/// The contribution rate applied to the gross salary (9.5%).
pub const CONTRIBUTION_RATE: Decimal = Decimal::from_parts(95, 0, 0, false, 3);

/// Returns the social-security contribution owed on `gross`.
///
/// # Examples
///
/// ```
/// use net_salary_engine::calculation::calculate_contribution;
/// use rust_decimal::Decimal;
///
/// let contribution = calculate_contribution(Decimal::new(40_000, 0));
/// assert_eq!(contribution, Decimal::new(3_800, 0));
/// ```
pub fn calculate_contribution(gross: Decimal) -> Decimal {
    gross * CONTRIBUTION_RATE
}
