//! Progressive national income tax calculation.
//!
//! The national tax uses three brackets: 23% up to 28,000, 35% from 28,000
//! to 50,000 and 43% above 50,000. It is computed by the same bracket walk
//! as the regional surtax, so both share one definition of "progressive".

use rust_decimal::Decimal;

use crate::models::TaxBracket;

use super::bracket_walk::progressive_tax;

/// The national income tax schedule, in ascending order.
pub const NATIONAL_TAX_BRACKETS: [TaxBracket; 3] = [
    TaxBracket::up_to(
        Decimal::from_parts(28_000, 0, 0, false, 0),
        Decimal::from_parts(23, 0, 0, false, 2),
    ),
    TaxBracket::up_to(
        Decimal::from_parts(50_000, 0, 0, false, 0),
        Decimal::from_parts(35, 0, 0, false, 2),
    ),
    TaxBracket::unbounded(Decimal::from_parts(43, 0, 0, false, 2)),
];

/// Returns the national income tax on `taxable_base`.
///
/// A base of zero or less owes nothing.
///
/// # Examples
///
/// ```
/// use net_salary_engine::calculation::calculate_national_tax;
/// use rust_decimal::Decimal;
///
/// // 28,000 at 23% + 8,200 at 35%
/// let tax = calculate_national_tax(Decimal::new(36_200, 0));
/// assert_eq!(tax, Decimal::new(9_310, 0));
/// ```
pub fn calculate_national_tax(taxable_base: Decimal) -> Decimal {
    progressive_tax(taxable_base, &NATIONAL_TAX_BRACKETS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// The per-band closed form of the same schedule.
    fn closed_form(base: Decimal) -> Decimal {
        if base <= Decimal::ZERO {
            Decimal::ZERO
        } else if base <= dec("28000") {
            base * dec("0.23")
        } else if base <= dec("50000") {
            dec("28000") * dec("0.23") + (base - dec("28000")) * dec("0.35")
        } else {
            dec("28000") * dec("0.23")
                + dec("22000") * dec("0.35")
                + (base - dec("50000")) * dec("0.43")
        }
    }

    #[test]
    fn test_zero_base_owes_nothing() {
        assert_eq!(calculate_national_tax(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_negative_base_owes_nothing() {
        assert_eq!(calculate_national_tax(dec("-10")), Decimal::ZERO);
    }

    #[test]
    fn test_first_band_only() {
        assert_eq!(calculate_national_tax(dec("10000")), dec("2300"));
    }

    #[test]
    fn test_exactly_at_first_break_point() {
        assert_eq!(calculate_national_tax(dec("28000")), dec("28000") * dec("0.23"));
        assert_eq!(calculate_national_tax(dec("28000")), dec("6440"));
    }

    #[test]
    fn test_just_above_first_break_point() {
        assert_eq!(
            calculate_national_tax(dec("28000.01")),
            dec("28000") * dec("0.23") + dec("0.01") * dec("0.35")
        );
        assert_eq!(calculate_national_tax(dec("28000.01")), dec("6440.0035"));
    }

    #[test]
    fn test_second_band() {
        assert_eq!(calculate_national_tax(dec("36200")), dec("9310"));
    }

    #[test]
    fn test_exactly_at_second_break_point() {
        assert_eq!(calculate_national_tax(dec("50000")), dec("14140"));
    }

    #[test]
    fn test_third_band() {
        // 6,440 + 7,700 + 10,000 * 0.43
        assert_eq!(calculate_national_tax(dec("60000")), dec("18440"));
    }

    #[test]
    fn test_matches_closed_form_across_bands() {
        for base in [
            "0.01", "1", "15000", "27999.99", "28000", "28000.01", "36200", "49999.99",
            "50000", "50000.01", "90500", "1000000",
        ] {
            let base = dec(base);
            assert_eq!(
                calculate_national_tax(base),
                closed_form(base),
                "mismatch at base {}",
                base
            );
        }
    }

    #[test]
    fn test_brackets_are_ascending() {
        assert_eq!(NATIONAL_TAX_BRACKETS[0].rate, dec("0.23"));
        assert_eq!(NATIONAL_TAX_BRACKETS[1].rate, dec("0.35"));
        assert_eq!(NATIONAL_TAX_BRACKETS[2].rate, dec("0.43"));
    }
}
