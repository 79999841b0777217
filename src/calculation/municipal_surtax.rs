//! Flat municipal surtax calculation.

use rust_decimal::Decimal;

/// The municipal surtax rate applied to the taxable base (0.8%).
pub const MUNICIPAL_SURTAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 3);

/// Returns the municipal surtax on `taxable_base`, or zero when the base is
/// zero or negative.
///
/// # Examples
///
/// ```
/// use net_salary_engine::calculation::calculate_municipal_surtax;
/// use rust_decimal::Decimal;
///
/// let surtax = calculate_municipal_surtax(Decimal::new(36_200, 0));
/// assert_eq!(surtax, Decimal::new(2_896, 1));
/// ```
pub fn calculate_municipal_surtax(taxable_base: Decimal) -> Decimal {
    if taxable_base <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    taxable_base * MUNICIPAL_SURTAX_RATE
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_flat_rate_on_base() {
        assert_eq!(calculate_municipal_surtax(dec("36200")), dec("289.6"));
        assert_eq!(calculate_municipal_surtax(dec("100000")), dec("800"));
    }

    #[test]
    fn test_zero_base_owes_nothing() {
        assert_eq!(calculate_municipal_surtax(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_negative_base_owes_nothing() {
        assert_eq!(calculate_municipal_surtax(dec("-1000")), Decimal::ZERO);
    }
}
