//! Configuration loading for the Net Salary Engine service.
//!
//! This module loads the HTTP service settings from a YAML file: listen
//! address, default log filter and whether responses include the audit
//! trace.
//!
//! # Example
//!
//! ```no_run
//! use net_salary_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/service.yaml").unwrap();
//! println!("Listening on {}", loader.config().bind_address);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::ServiceConfig;
