//! Request types for the Net Salary Engine API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use serde::{Deserialize, Serialize};

use crate::models::RawSalary;

/// Request body for the `/calculate` endpoint.
///
/// `gross_salary` may be a JSON number or a string; anything else, or a
/// missing value, is reported as invalid input rather than malformed JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The annual gross salary, unvalidated.
    #[serde(default)]
    pub gross_salary: serde_json::Value,
}

impl CalculationRequest {
    /// Creates a request for the given raw salary.
    pub fn new(gross_salary: impl Into<RawSalary>) -> Self {
        let gross_salary = match gross_salary.into() {
            RawSalary::Text(text) => serde_json::Value::String(text),
            RawSalary::Number(value) => serde_json::Number::from_f64(value)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
        };
        Self { gross_salary }
    }

    /// Returns the salary as a [`RawSalary`] ready for validation.
    ///
    /// Numbers are passed on as their decimal text so that values such as
    /// `40000.10` are not routed through binary floating point.
    pub fn raw_salary(&self) -> RawSalary {
        match &self.gross_salary {
            serde_json::Value::String(text) => RawSalary::Text(text.clone()),
            serde_json::Value::Number(number) => RawSalary::Text(number.to_string()),
            serde_json::Value::Null => RawSalary::Text(String::new()),
            other => RawSalary::Text(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_numeric_salary() {
        let request: CalculationRequest =
            serde_json::from_str(r#"{ "gross_salary": 40000 }"#).unwrap();
        assert_eq!(request.raw_salary(), RawSalary::Text("40000".to_string()));
    }

    #[test]
    fn test_deserialize_text_salary() {
        let request: CalculationRequest =
            serde_json::from_str(r#"{ "gross_salary": " 40000 " }"#).unwrap();
        assert_eq!(request.raw_salary(), RawSalary::Text(" 40000 ".to_string()));
    }

    #[test]
    fn test_missing_salary_becomes_empty_text() {
        let request: CalculationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.raw_salary(), RawSalary::Text(String::new()));
    }

    #[test]
    fn test_non_scalar_salary_is_kept_as_text() {
        let request: CalculationRequest =
            serde_json::from_str(r#"{ "gross_salary": true }"#).unwrap();
        assert_eq!(request.raw_salary(), RawSalary::Text("true".to_string()));
    }

    #[test]
    fn test_new_from_number_and_text() {
        let request = CalculationRequest::new(52000.5);
        assert_eq!(request.gross_salary, serde_json::json!(52000.5));

        let request = CalculationRequest::new("52000.50");
        assert_eq!(request.gross_salary, serde_json::json!("52000.50"));
    }

    #[test]
    fn test_new_from_nan_serializes_null() {
        let request = CalculationRequest::new(f64::NAN);
        assert!(request.gross_salary.is_null());
    }
}
