//! Port traits implemented by [`crate::adapters`].

pub mod audit_port;
pub mod config_port;
