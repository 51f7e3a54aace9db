//! Core domain types and logic.

pub mod chart_of_accounts;
pub mod engine_config;
pub mod error;
pub mod formula;
pub mod indicator;
pub mod registry;
pub mod statement;
pub mod value_store;
