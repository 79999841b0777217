//! Net Salary Engine
//!
//! This crate computes net annual and monthly income from a gross annual
//! salary: social-security contribution, progressive national income tax,
//! progressive regional surtax and flat municipal surtax. The calculation
//! core is a pipeline of pure functions in [`calculation`]; [`api`] exposes
//! it over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
