//! Concrete adapter implementations for ports.

pub mod file_config_adapter;
pub mod log_audit_adapter;
