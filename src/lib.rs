//! cashflow — cash-flow statement totals over an alias-resolving indicator
//! registry.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`].

pub mod adapters;
pub mod domain;
pub mod ports;

pub use domain::error::CashflowError;
pub use domain::registry::{DuplicatePolicy, IndicatorRegistry};
pub use domain::statement::CashFlowStatement;
pub use domain::value_store::{Lookup, ValueStore};
