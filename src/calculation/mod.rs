//! Calculation logic for the Net Salary Engine.
//!
//! This module contains the pipeline that turns a gross annual salary into
//! net income: social-security contribution, taxable base reduction,
//! progressive national income tax, progressive regional surtax, flat
//! municipal surtax and the final aggregation into net annual and monthly
//! amounts. Both progressive taxes share one generic bracket walk.
//!
//! [`compute`] is the entry point; the individual calculators are exposed
//! for callers that need a single figure.

mod audit;
mod bracket_walk;
mod contribution;
mod municipal_surtax;
mod national_tax;
mod net_income;
mod regional_surtax;
mod taxable_base;

pub use audit::build_audit_trace;
pub use bracket_walk::{BracketSlice, BracketWalk, progressive_tax, walk_brackets};
pub use contribution::{CONTRIBUTION_RATE, calculate_contribution};
pub use municipal_surtax::{MUNICIPAL_SURTAX_RATE, calculate_municipal_surtax};
pub use national_tax::{NATIONAL_TAX_BRACKETS, calculate_national_tax};
pub use net_income::{MONTHLY_INSTALLMENTS, compute, compute_salary};
pub use regional_surtax::{REGIONAL_SURTAX_BRACKETS, calculate_regional_surtax};
pub use taxable_base::calculate_taxable_base;
