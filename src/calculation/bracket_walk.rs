//! Generic progressive bracket walk.
//!
//! This module provides the single algorithm behind every progressive tax
//! in the engine. A taxable base is walked through an ordered schedule of
//! brackets; each bracket taxes only the span of the base that falls inside
//! it, at its own marginal rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{BracketLimit, TaxBracket};

/// The share of a taxable base that fell inside one bracket.
///
/// # Example
///
/// ```
/// use net_salary_engine::calculation::{REGIONAL_SURTAX_BRACKETS, walk_brackets};
/// use rust_decimal::Decimal;
///
/// let slices: Vec<_> = walk_brackets(Decimal::new(20_000, 0), &REGIONAL_SURTAX_BRACKETS).collect();
/// assert_eq!(slices.len(), 2);
/// assert_eq!(slices[1].lower, Decimal::new(15_000, 0));
/// assert_eq!(slices[1].taxable, Decimal::new(5_000, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketSlice {
    /// The lower bound of the bracket (the previous bracket's limit).
    pub lower: Decimal,
    /// The upper limit of the bracket.
    pub limit: BracketLimit,
    /// The portion of the base taxed in this bracket.
    pub taxable: Decimal,
    /// The marginal rate of the bracket.
    pub rate: Decimal,
    /// `taxable * rate`.
    pub tax: Decimal,
}

/// Iterator over the non-empty [`BracketSlice`]s of a bracket walk.
///
/// Created by [`walk_brackets`].
#[derive(Debug, Clone)]
pub struct BracketWalk<'a> {
    brackets: std::slice::Iter<'a, TaxBracket>,
    remaining: Decimal,
    previous_limit: Decimal,
}

impl Iterator for BracketWalk<'_> {
    type Item = BracketSlice;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining > Decimal::ZERO {
            let bracket = self.brackets.next()?;
            let lower = self.previous_limit;

            let taxable = match bracket.limit.width_from(lower) {
                Some(width) => self.remaining.min(width),
                None => self.remaining,
            };

            if let BracketLimit::UpTo(limit) = bracket.limit {
                self.previous_limit = limit;
            }

            if taxable > Decimal::ZERO {
                self.remaining -= taxable;
                return Some(BracketSlice {
                    lower,
                    limit: bracket.limit,
                    taxable,
                    rate: bracket.rate,
                    tax: taxable * bracket.rate,
                });
            }
        }
        None
    }
}

/// Walks `base` through an ordered, contiguous bracket schedule.
///
/// Yields one slice per bracket that taxes a positive span, in ascending
/// order, and stops as soon as the whole base has been allocated. A base of
/// zero or less yields nothing. If the schedule ends with a bounded bracket,
/// any part of the base above its limit is left untaxed.
pub fn walk_brackets(base: Decimal, brackets: &[TaxBracket]) -> BracketWalk<'_> {
    BracketWalk {
        brackets: brackets.iter(),
        remaining: base.max(Decimal::ZERO),
        previous_limit: Decimal::ZERO,
    }
}

/// Returns the total progressive tax on `base` for the given schedule.
///
/// # Examples
///
/// ```
/// use net_salary_engine::calculation::progressive_tax;
/// use net_salary_engine::models::TaxBracket;
/// use rust_decimal::Decimal;
///
/// let schedule = [
///     TaxBracket::up_to(Decimal::new(10_000, 0), Decimal::new(10, 2)),
///     TaxBracket::unbounded(Decimal::new(20, 2)),
/// ];
///
/// // 10,000 at 10% + 5,000 at 20%
/// assert_eq!(progressive_tax(Decimal::new(15_000, 0), &schedule), Decimal::new(2_000, 0));
/// assert_eq!(progressive_tax(Decimal::ZERO, &schedule), Decimal::ZERO);
/// ```
pub fn progressive_tax(base: Decimal, brackets: &[TaxBracket]) -> Decimal {
    walk_brackets(base, brackets).map(|slice| slice.tax).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn two_bracket_schedule() -> [TaxBracket; 2] {
        [
            TaxBracket::up_to(dec("10000"), dec("0.10")),
            TaxBracket::unbounded(dec("0.20")),
        ]
    }

    #[test]
    fn test_zero_base_yields_no_slices() {
        let schedule = two_bracket_schedule();
        assert_eq!(walk_brackets(Decimal::ZERO, &schedule).count(), 0);
        assert_eq!(progressive_tax(Decimal::ZERO, &schedule), Decimal::ZERO);
    }

    #[test]
    fn test_negative_base_yields_no_slices() {
        let schedule = two_bracket_schedule();
        assert_eq!(walk_brackets(dec("-500"), &schedule).count(), 0);
        assert_eq!(progressive_tax(dec("-500"), &schedule), Decimal::ZERO);
    }

    #[test]
    fn test_base_inside_first_bracket() {
        let schedule = two_bracket_schedule();
        let slices: Vec<_> = walk_brackets(dec("4000"), &schedule).collect();

        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].lower, Decimal::ZERO);
        assert_eq!(slices[0].taxable, dec("4000"));
        assert_eq!(slices[0].tax, dec("400"));
    }

    #[test]
    fn test_base_exactly_at_limit_stays_in_bracket() {
        let schedule = two_bracket_schedule();
        let slices: Vec<_> = walk_brackets(dec("10000"), &schedule).collect();

        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].limit, BracketLimit::UpTo(dec("10000")));
    }

    #[test]
    fn test_unbounded_bracket_takes_the_rest() {
        let schedule = two_bracket_schedule();
        let slices: Vec<_> = walk_brackets(dec("1000000"), &schedule).collect();

        assert_eq!(slices.len(), 2);
        assert_eq!(slices[1].lower, dec("10000"));
        assert_eq!(slices[1].limit, BracketLimit::Unbounded);
        assert_eq!(slices[1].taxable, dec("990000"));
        assert_eq!(progressive_tax(dec("1000000"), &schedule), dec("199000"));
    }

    #[test]
    fn test_slices_are_contiguous_and_cover_base() {
        let schedule = [
            TaxBracket::up_to(dec("100"), dec("0.01")),
            TaxBracket::up_to(dec("250"), dec("0.02")),
            TaxBracket::up_to(dec("400"), dec("0.03")),
            TaxBracket::unbounded(dec("0.04")),
        ];
        let slices: Vec<_> = walk_brackets(dec("333.33"), &schedule).collect();

        assert_eq!(slices.len(), 3);
        let mut expected_lower = Decimal::ZERO;
        for slice in &slices {
            assert_eq!(slice.lower, expected_lower);
            expected_lower = match slice.limit {
                BracketLimit::UpTo(limit) => limit,
                BracketLimit::Unbounded => unreachable!(),
            };
        }
        let covered: Decimal = slices.iter().map(|s| s.taxable).sum();
        assert_eq!(covered, dec("333.33"));
    }

    #[test]
    fn test_bounded_schedule_leaves_excess_untaxed() {
        let schedule = [TaxBracket::up_to(dec("1000"), dec("0.5"))];
        assert_eq!(progressive_tax(dec("5000"), &schedule), dec("500"));
    }

    #[test]
    fn test_zero_width_bracket_is_skipped() {
        let schedule = [
            TaxBracket::up_to(dec("1000"), dec("0.10")),
            TaxBracket::up_to(dec("1000"), dec("0.90")),
            TaxBracket::unbounded(dec("0.20")),
        ];
        let slices: Vec<_> = walk_brackets(dec("1500"), &schedule).collect();

        assert_eq!(slices.len(), 2);
        assert_eq!(slices[1].rate, dec("0.20"));
        assert_eq!(progressive_tax(dec("1500"), &schedule), dec("200"));
    }

    #[test]
    fn test_empty_schedule_taxes_nothing() {
        assert_eq!(progressive_tax(dec("1500"), &[]), Decimal::ZERO);
    }
}
