//! Progressive tax bracket types.
//!
//! A schedule is an ordered, contiguous slice of [`TaxBracket`]s. Each
//! bracket covers the span between the previous bracket's limit and its own
//! limit; the final bracket of a schedule is usually [`BracketLimit::Unbounded`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The upper limit of a tax bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketLimit {
    /// The bracket ends at this amount (inclusive).
    UpTo(Decimal),
    /// The bracket has no upper limit.
    Unbounded,
}

impl BracketLimit {
    /// Returns the width of the bracket starting at `previous_limit`, or
    /// `None` for an unbounded bracket.
    pub fn width_from(&self, previous_limit: Decimal) -> Option<Decimal> {
        match self {
            BracketLimit::UpTo(limit) => Some(*limit - previous_limit),
            BracketLimit::Unbounded => None,
        }
    }
}

/// A single bracket in a progressive schedule.
///
/// # Example
///
/// ```
/// use net_salary_engine::models::{BracketLimit, TaxBracket};
/// use rust_decimal::Decimal;
///
/// let bracket = TaxBracket::up_to(Decimal::new(15_000, 0), Decimal::new(123, 4));
/// assert_eq!(bracket.limit, BracketLimit::UpTo(Decimal::new(15_000, 0)));
/// assert_eq!(bracket.rate.to_string(), "0.0123");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// The upper limit of the bracket.
    pub limit: BracketLimit,
    /// The marginal rate applied to the span inside this bracket.
    pub rate: Decimal,
}

impl TaxBracket {
    /// Creates a bracket ending at `limit`.
    pub const fn up_to(limit: Decimal, rate: Decimal) -> Self {
        Self {
            limit: BracketLimit::UpTo(limit),
            rate,
        }
    }

    /// Creates a bracket with no upper limit.
    pub const fn unbounded(rate: Decimal) -> Self {
        Self {
            limit: BracketLimit::Unbounded,
            rate,
        }
    }
}
