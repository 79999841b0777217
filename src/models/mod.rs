//! Core data models for the Net Salary Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod salary;
mod tax_bracket;
mod tax_result;

pub use salary::{GrossSalary, RawSalary};
pub use tax_bracket::{BracketLimit, TaxBracket};
pub use tax_result::{AuditStep, AuditTrace, CalculationResponse, TaxResult};
