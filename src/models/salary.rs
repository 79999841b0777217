//! Gross salary input types.
//!
//! This module defines [`RawSalary`], the unvalidated value supplied by a
//! caller, and [`GrossSalary`], the validated amount the calculation
//! pipeline works on. The only way to obtain a `GrossSalary` is through
//! validation, so every downstream calculator can assume a positive amount.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An unvalidated gross salary as received from a caller.
///
/// Callers may send either a JSON number or free text (for example the
/// contents of an input field). Text is trimmed before parsing.
///
/// # Example
///
/// ```
/// use net_salary_engine::models::RawSalary;
///
/// let from_text: RawSalary = " 40000 ".into();
/// let from_number: RawSalary = 40000.0.into();
/// assert_eq!(from_text, RawSalary::Text(" 40000 ".to_string()));
/// assert_eq!(from_number, RawSalary::Number(40000.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawSalary {
    /// A numeric value, possibly NaN or infinite.
    Number(f64),
    /// A textual value, possibly empty or non-numeric.
    Text(String),
}

impl fmt::Display for RawSalary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawSalary::Number(value) => write!(f, "{}", value),
            RawSalary::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<f64> for RawSalary {
    fn from(value: f64) -> Self {
        RawSalary::Number(value)
    }
}

impl From<i64> for RawSalary {
    fn from(value: i64) -> Self {
        RawSalary::Text(value.to_string())
    }
}

impl From<Decimal> for RawSalary {
    fn from(value: Decimal) -> Self {
        RawSalary::Text(value.to_string())
    }
}

impl From<&str> for RawSalary {
    fn from(value: &str) -> Self {
        RawSalary::Text(value.to_string())
    }
}

impl From<String> for RawSalary {
    fn from(value: String) -> Self {
        RawSalary::Text(value)
    }
}

/// A validated annual gross salary, strictly greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct GrossSalary(Decimal);

impl GrossSalary {
    /// Validates a decimal amount as a gross salary.
    ///
    /// Returns `InvalidInput` for zero or negative amounts.
    ///
    /// # Example
    ///
    /// ```
    /// use net_salary_engine::models::GrossSalary;
    /// use rust_decimal::Decimal;
    ///
    /// assert!(GrossSalary::new(Decimal::new(40_000, 0)).is_ok());
    /// assert!(GrossSalary::new(Decimal::ZERO).is_err());
    /// ```
    pub fn new(amount: Decimal) -> EngineResult<Self> {
        if amount > Decimal::ZERO {
            Ok(Self(amount))
        } else {
            Err(EngineError::InvalidInput {
                raw: amount.to_string(),
            })
        }
    }

    /// Parses and validates a raw salary value.
    ///
    /// Fails with `InvalidInput` when the value is empty, non-numeric,
    /// non-finite, outside the decimal range, zero or negative.
    pub fn parse(raw: &RawSalary) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidInput {
            raw: raw.to_string(),
        };

        let amount = match raw {
            RawSalary::Number(value) => Decimal::from_f64(*value).ok_or_else(invalid)?,
            RawSalary::Text(text) => parse_decimal_text(text.trim()).ok_or_else(invalid)?,
        };

        Self::new(amount).map_err(|_| invalid())
    }

    /// Returns the salary amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl FromStr for GrossSalary {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(&RawSalary::from(s))
    }
}

fn parse_decimal_text(text: &str) -> Option<Decimal> {
    // `Decimal::from_str` skips `_` separators; a salary field never has them.
    if text.is_empty() || text.contains('_') {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}
