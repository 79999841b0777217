//! Configuration types for the HTTP service.
//!
//! These structures are deserialized from the YAML service configuration.
//! The tax schedule is compiled into the engine and is not configurable.

use std::net::{Ipv4Addr, SocketAddr};

use serde::Deserialize;

/// Settings for running the engine as an HTTP service.
///
/// Every key is optional; omitted keys take the values of
/// [`ServiceConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Address the HTTP server listens on.
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,
    /// Default `tracing` filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Whether `/calculate` responses carry the step-by-step audit trace.
    #[serde(default = "default_include_audit_trace")]
    pub include_audit_trace: bool,
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, 3000))
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_include_audit_trace() -> bool {
    true
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            log_filter: default_log_filter(),
            include_audit_trace: default_include_audit_trace(),
        }
    }
}
