//! Progressive regional surtax calculation.
//!
//! The regional surtax walks four brackets, each taxing only the marginal
//! span of the base that falls inside it.

use rust_decimal::Decimal;

use crate::models::TaxBracket;

use super::bracket_walk::progressive_tax;

/// The regional surtax schedule, in ascending order.
///
/// | upper limit | rate  |
/// |-------------|-------|
/// | 15,000      | 1.23% |
/// | 28,000      | 1.58% |
/// | 50,000      | 1.72% |
/// | unbounded   | 1.73% |
pub const REGIONAL_SURTAX_BRACKETS: [TaxBracket; 4] = [
    TaxBracket::up_to(
        Decimal::from_parts(15_000, 0, 0, false, 0),
        Decimal::from_parts(123, 0, 0, false, 4),
    ),
    TaxBracket::up_to(
        Decimal::from_parts(28_000, 0, 0, false, 0),
        Decimal::from_parts(158, 0, 0, false, 4),
    ),
    TaxBracket::up_to(
        Decimal::from_parts(50_000, 0, 0, false, 0),
        Decimal::from_parts(172, 0, 0, false, 4),
    ),
    TaxBracket::unbounded(Decimal::from_parts(173, 0, 0, false, 4)),
];

/// Returns the regional surtax on `taxable_base`.
///
/// A base of zero or less owes nothing.
///
/// # Examples
///
/// ```
/// use net_salary_engine::calculation::calculate_regional_surtax;
/// use rust_decimal::Decimal;
///
/// let surtax = calculate_regional_surtax(Decimal::new(36_200, 0));
/// assert_eq!(surtax, Decimal::new(53_094, 2));
/// ```
pub fn calculate_regional_surtax(taxable_base: Decimal) -> Decimal {
    progressive_tax(taxable_base, &REGIONAL_SURTAX_BRACKETS)
}
