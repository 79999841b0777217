//! Calculation result models for the Net Salary Engine.
//!
//! This module contains the [`TaxResult`] record produced by every
//! calculation, the [`AuditTrace`] that explains how it was reached, and
//! the [`CalculationResponse`] envelope returned by the HTTP API.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The full breakdown of deductions and net income for one gross salary.
///
/// Every field is derived from the gross salary and is non-negative.
/// Amounts keep full decimal precision; use [`TaxResult::rounded`] for a
/// copy rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    /// The annual gross salary the calculation started from.
    pub gross_salary: Decimal,
    /// Social-security contribution withheld from the gross salary.
    pub contribution: Decimal,
    /// Gross salary minus contribution; the base for all taxes.
    pub taxable_base: Decimal,
    /// Progressive national income tax.
    pub national_tax: Decimal,
    /// Progressive regional surtax.
    pub regional_surtax: Decimal,
    /// Flat municipal surtax.
    pub municipal_surtax: Decimal,
    /// Contribution plus all taxes and surtaxes.
    pub total_deductions: Decimal,
    /// Take-home pay for the year.
    pub net_annual: Decimal,
    /// Take-home pay per installment.
    pub net_monthly: Decimal,
    /// Total deductions as a percentage of gross salary.
    pub effective_rate: Decimal,
}

impl TaxResult {
    /// Returns a copy with every field rounded to two decimal places,
    /// midpoints away from zero.
    ///
    /// # Example
    ///
    /// ```
    /// use net_salary_engine::calculation::compute;
    /// use rust_decimal::Decimal;
    ///
    /// let result = compute("40000").unwrap().rounded();
    /// assert_eq!(result.net_monthly, Decimal::new(200534, 2));
    /// assert_eq!(result.effective_rate, Decimal::new(3483, 2));
    /// ```
    pub fn rounded(&self) -> Self {
        let round = |value: Decimal| {
            value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        };

        Self {
            gross_salary: round(self.gross_salary),
            contribution: round(self.contribution),
            taxable_base: round(self.taxable_base),
            national_tax: round(self.national_tax),
            regional_surtax: round(self.regional_surtax),
            municipal_surtax: round(self.municipal_surtax),
            total_deductions: round(self.total_deductions),
            net_annual: round(self.net_annual),
            net_monthly: round(self.net_monthly),
            effective_rate: round(self.effective_rate),
        }
    }
}

/// A single step in the audit trace recording one pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the computation.
    pub reasoning: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use net_salary_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     duration_us: 12,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The body returned by a successful `/calculate` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The calculated breakdown.
    pub result: TaxResult,
    /// How the breakdown was reached, when enabled in the service config.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit_trace: Option<AuditTrace>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_result() -> TaxResult {
        TaxResult {
            gross_salary: dec("40000"),
            contribution: dec("3800.000"),
            taxable_base: dec("36200.000"),
            national_tax: dec("9310"),
            regional_surtax: dec("530.94"),
            municipal_surtax: dec("289.6"),
            total_deductions: dec("13930.54"),
            net_annual: dec("26069.46"),
            net_monthly: dec("2005.3430769230769230769230769"),
            effective_rate: dec("34.82635"),
        }
    }

    #[test]
    fn test_rounded_rounds_every_field_to_cents() {
        let rounded = sample_result().rounded();
        assert_eq!(rounded.net_monthly, dec("2005.34"));
        assert_eq!(rounded.effective_rate, dec("34.83"));
        assert_eq!(rounded.net_annual, dec("26069.46"));
        assert_eq!(rounded.contribution.scale(), 2);
    }

    #[test]
    fn test_rounded_midpoint_goes_away_from_zero() {
        let mut result = sample_result();
        result.municipal_surtax = dec("10.005");
        assert_eq!(result.rounded().municipal_surtax, dec("10.01"));
    }

    #[test]
    fn test_tax_result_serializes_decimals_as_strings() {
        let json = serde_json::to_value(sample_result()).unwrap();
        assert_eq!(json["net_annual"], "26069.46");
        assert_eq!(json["national_tax"], "9310");
    }

    #[test]
    fn test_response_omits_missing_audit_trace() {
        let response = CalculationResponse {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            result: sample_result(),
            audit_trace: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("audit_trace"));

        let parsed: CalculationResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.result, sample_result());
    }
}
