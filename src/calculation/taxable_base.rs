//! Taxable base reduction.

use rust_decimal::Decimal;

/// Returns the taxable base: gross salary minus contribution, never below zero.
///
/// # Examples
///
/// ```
/// use net_salary_engine::calculation::calculate_taxable_base;
/// use rust_decimal::Decimal;
///
/// let base = calculate_taxable_base(Decimal::new(40_000, 0), Decimal::new(3_800, 0));
/// assert_eq!(base, Decimal::new(36_200, 0));
///
/// let floored = calculate_taxable_base(Decimal::new(100, 0), Decimal::new(150, 0));
/// assert_eq!(floored, Decimal::ZERO);
/// ```
pub fn calculate_taxable_base(gross: Decimal, contribution: Decimal) -> Decimal {
    (gross - contribution).max(Decimal::ZERO)
}
