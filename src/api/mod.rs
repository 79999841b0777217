//! HTTP API module for the Net Salary Engine.
//!
//! This module provides the REST API endpoint that computes a net income
//! breakdown from a gross annual salary.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
