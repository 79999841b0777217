//! Net income aggregation: the engine's entry point.
//!
//! This module validates the raw gross salary, runs every calculator in
//! order and assembles the [`TaxResult`]. Validation is the only step that
//! can fail; all arithmetic after it is total.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{GrossSalary, RawSalary, TaxResult};

use super::contribution::calculate_contribution;
use super::municipal_surtax::calculate_municipal_surtax;
use super::national_tax::calculate_national_tax;
use super::regional_surtax::calculate_regional_surtax;
use super::taxable_base::calculate_taxable_base;

/// The number of installments the net annual salary is paid in.
pub const MONTHLY_INSTALLMENTS: Decimal = Decimal::from_parts(13, 0, 0, false, 0);

const PERCENT: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Computes the net income breakdown for a raw gross salary.
///
/// Accepts anything convertible into a [`RawSalary`]: text such as the
/// contents of an input field, or a number.
///
/// # Errors
///
/// Returns `EngineError::InvalidInput` when the value is empty, non-numeric,
/// non-finite, zero or negative. No calculation runs in that case.
///
/// # Examples
///
/// ```
/// use net_salary_engine::calculation::compute;
/// use rust_decimal::Decimal;
///
/// let result = compute("40000").unwrap();
/// assert_eq!(result.total_deductions, Decimal::new(1_393_054, 2));
/// assert_eq!(result.net_annual, Decimal::new(2_606_946, 2));
///
/// assert!(compute("-1").is_err());
/// assert!(compute(f64::NAN).is_err());
/// ```
pub fn compute(raw: impl Into<RawSalary>) -> EngineResult<TaxResult> {
    let gross = GrossSalary::parse(&raw.into())?;
    Ok(compute_salary(gross))
}

/// Computes the net income breakdown for an already validated salary.
pub fn compute_salary(gross: GrossSalary) -> TaxResult {
    let gross_salary = gross.amount();

    let contribution = calculate_contribution(gross_salary);
    let taxable_base = calculate_taxable_base(gross_salary, contribution);

    let national_tax = calculate_national_tax(taxable_base);
    let regional_surtax = calculate_regional_surtax(taxable_base);
    let municipal_surtax = calculate_municipal_surtax(taxable_base);

    let total_deductions = contribution + national_tax + regional_surtax + municipal_surtax;
    let net_annual = (gross_salary - total_deductions).max(Decimal::ZERO);
    let net_monthly = net_annual / MONTHLY_INSTALLMENTS;
    let effective_rate = total_deductions / gross_salary * PERCENT;

    TaxResult {
        gross_salary,
        contribution,
        taxable_base,
        national_tax,
        regional_surtax,
        municipal_surtax,
        total_deductions,
        net_annual,
        net_monthly,
        effective_rate,
    }
}
