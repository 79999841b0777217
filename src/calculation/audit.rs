//! Audit trace construction.
//!
//! This module turns a [`TaxResult`] into an ordered list of [`AuditStep`]s,
//! one per pipeline stage, so a caller can render the full breakdown from
//! gross salary down to net income. Progressive steps list every bracket
//! slice that contributed to the total.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{AuditStep, AuditTrace, BracketLimit, TaxBracket, TaxResult};

use super::bracket_walk::{BracketSlice, walk_brackets};
use super::contribution::CONTRIBUTION_RATE;
use super::municipal_surtax::MUNICIPAL_SURTAX_RATE;
use super::national_tax::NATIONAL_TAX_BRACKETS;
use super::net_income::MONTHLY_INSTALLMENTS;
use super::regional_surtax::REGIONAL_SURTAX_BRACKETS;

/// Builds the audit trace explaining `result`.
///
/// # Examples
///
/// ```
/// use net_salary_engine::calculation::{build_audit_trace, compute};
///
/// let result = compute("40000").unwrap();
/// let trace = build_audit_trace(&result, 0);
///
/// assert_eq!(trace.steps.len(), 8);
/// assert_eq!(trace.steps[0].rule_id, "gross_salary");
/// assert_eq!(trace.steps[7].rule_id, "net_income");
/// ```
pub fn build_audit_trace(result: &TaxResult, duration_us: u64) -> AuditTrace {
    let steps = vec![
        gross_salary_step(1, result),
        contribution_step(2, result),
        taxable_base_step(3, result),
        bracket_step(
            4,
            "national_tax",
            "National Income Tax",
            result.taxable_base,
            &NATIONAL_TAX_BRACKETS,
            result.national_tax,
        ),
        bracket_step(
            5,
            "regional_surtax",
            "Regional Surtax",
            result.taxable_base,
            &REGIONAL_SURTAX_BRACKETS,
            result.regional_surtax,
        ),
        municipal_surtax_step(6, result),
        total_deductions_step(7, result),
        net_income_step(8, result),
    ];

    AuditTrace { steps, duration_us }
}

fn gross_salary_step(step_number: u32, result: &TaxResult) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "gross_salary".to_string(),
        rule_name: "Gross Annual Salary".to_string(),
        input: serde_json::json!({}),
        output: serde_json::json!({
            "gross_salary": result.gross_salary.normalize().to_string()
        }),
        reasoning: format!("Gross annual salary of {}", result.gross_salary.normalize()),
    }
}

fn contribution_step(step_number: u32, result: &TaxResult) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "contribution".to_string(),
        rule_name: "Social Security Contribution".to_string(),
        input: serde_json::json!({
            "gross_salary": result.gross_salary.normalize().to_string(),
            "rate": CONTRIBUTION_RATE.normalize().to_string()
        }),
        output: serde_json::json!({
            "contribution": result.contribution.normalize().to_string()
        }),
        reasoning: format!(
            "{} x {} = {}",
            result.gross_salary.normalize(),
            CONTRIBUTION_RATE.normalize(),
            result.contribution.normalize()
        ),
    }
}

fn taxable_base_step(step_number: u32, result: &TaxResult) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "taxable_base".to_string(),
        rule_name: "Taxable Base".to_string(),
        input: serde_json::json!({
            "gross_salary": result.gross_salary.normalize().to_string(),
            "contribution": result.contribution.normalize().to_string()
        }),
        output: serde_json::json!({
            "taxable_base": result.taxable_base.normalize().to_string()
        }),
        reasoning: format!(
            "{} - {} = {}",
            result.gross_salary.normalize(),
            result.contribution.normalize(),
            result.taxable_base.normalize()
        ),
    }
}

fn bracket_step(
    step_number: u32,
    rule_id: &str,
    rule_name: &str,
    taxable_base: Decimal,
    brackets: &[TaxBracket],
    total: Decimal,
) -> AuditStep {
    let slices: Vec<BracketSlice> = walk_brackets(taxable_base, brackets).collect();

    let reasoning = if slices.is_empty() {
        format!("Taxable base is zero - no {} owed", rule_name.to_lowercase())
    } else {
        let parts: Vec<String> = slices
            .iter()
            .map(|slice| {
                format!(
                    "{} x {} = {}",
                    slice.taxable.normalize(),
                    slice.rate.normalize(),
                    slice.tax.normalize()
                )
            })
            .collect();
        format!("{} (total {})", parts.join(" + "), total.normalize())
    };

    let slices_json: Vec<serde_json::Value> = slices
        .iter()
        .map(|slice| {
            serde_json::json!({
                "lower": slice.lower.normalize().to_string(),
                "limit": limit_label(slice.limit),
                "taxable": slice.taxable.normalize().to_string(),
                "rate": slice.rate.normalize().to_string(),
                "tax": slice.tax.normalize().to_string()
            })
        })
        .collect();

    let mut output = serde_json::Map::new();
    output.insert(
        rule_id.to_string(),
        serde_json::Value::String(total.normalize().to_string()),
    );
    output.insert("brackets".to_string(), serde_json::Value::Array(slices_json));

    AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        input: serde_json::json!({
            "taxable_base": taxable_base.normalize().to_string()
        }),
        output: serde_json::Value::Object(output),
        reasoning,
    }
}

fn municipal_surtax_step(step_number: u32, result: &TaxResult) -> AuditStep {
    let reasoning = if result.taxable_base > Decimal::ZERO {
        format!(
            "{} x {} = {}",
            result.taxable_base.normalize(),
            MUNICIPAL_SURTAX_RATE.normalize(),
            result.municipal_surtax.normalize()
        )
    } else {
        "Taxable base is zero - no municipal surtax owed".to_string()
    };

    AuditStep {
        step_number,
        rule_id: "municipal_surtax".to_string(),
        rule_name: "Municipal Surtax".to_string(),
        input: serde_json::json!({
            "taxable_base": result.taxable_base.normalize().to_string(),
            "rate": MUNICIPAL_SURTAX_RATE.normalize().to_string()
        }),
        output: serde_json::json!({
            "municipal_surtax": result.municipal_surtax.normalize().to_string()
        }),
        reasoning,
    }
}

fn total_deductions_step(step_number: u32, result: &TaxResult) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "total_deductions".to_string(),
        rule_name: "Total Deductions".to_string(),
        input: serde_json::json!({
            "contribution": result.contribution.normalize().to_string(),
            "national_tax": result.national_tax.normalize().to_string(),
            "regional_surtax": result.regional_surtax.normalize().to_string(),
            "municipal_surtax": result.municipal_surtax.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_deductions": result.total_deductions.normalize().to_string()
        }),
        reasoning: format!(
            "{} + {} + {} + {} = {}",
            result.contribution.normalize(),
            result.national_tax.normalize(),
            result.regional_surtax.normalize(),
            result.municipal_surtax.normalize(),
            result.total_deductions.normalize()
        ),
    }
}

fn net_income_step(step_number: u32, result: &TaxResult) -> AuditStep {
    let effective_rate = result
        .effective_rate
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    let net_monthly = result
        .net_monthly
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    AuditStep {
        step_number,
        rule_id: "net_income".to_string(),
        rule_name: "Net Income".to_string(),
        input: serde_json::json!({
            "gross_salary": result.gross_salary.normalize().to_string(),
            "total_deductions": result.total_deductions.normalize().to_string(),
            "installments": MONTHLY_INSTALLMENTS.to_string()
        }),
        output: serde_json::json!({
            "net_annual": result.net_annual.normalize().to_string(),
            "net_monthly": result.net_monthly.normalize().to_string(),
            "effective_rate": result.effective_rate.normalize().to_string()
        }),
        reasoning: format!(
            "{} - {} = {} net per year, {} per installment over {}; deductions are {}% of gross",
            result.gross_salary.normalize(),
            result.total_deductions.normalize(),
            result.net_annual.normalize(),
            net_monthly,
            MONTHLY_INSTALLMENTS,
            effective_rate
        ),
    }
}

fn limit_label(limit: BracketLimit) -> String {
    match limit {
        BracketLimit::UpTo(limit) => limit.normalize().to_string(),
        BracketLimit::Unbounded => "unbounded".to_string(),
    }
}
