//! Value store: canonical-id keyed amounts, read and written by any alias.
//!
//! Writes through an unknown name fail with [`CashflowError::UnknownIndicator`].
//! Reads through an unknown name are reported on the audit port and yield
//! `0.0`; [`ValueStore::lookup`] exposes the distinction to callers that
//! need it.

use std::collections::HashMap;

use crate::adapters::log_audit_adapter::LogAuditAdapter;
use crate::domain::error::CashflowError;
use crate::domain::registry::IndicatorRegistry;
use crate::ports::audit_port::{AuditEvent, AuditPort};

/// Value returned for unresolved names and unset indicators.
pub const DEFAULT_VALUE: f64 = 0.0;

/// Outcome of a read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'r> {
    Value(f64),
    /// Known indicator, nothing stored yet.
    Unset { id: &'r str },
    Unresolved,
}

impl Lookup<'_> {
    pub fn value(&self) -> f64 {
        match self {
            Lookup::Value(v) => *v,
            Lookup::Unset { .. } | Lookup::Unresolved => DEFAULT_VALUE,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, Lookup::Unresolved)
    }
}

pub struct ValueStore<'a> {
    registry: &'a IndicatorRegistry,
    audit: &'a dyn AuditPort,
    values: HashMap<String, f64>,
}

impl<'a> ValueStore<'a> {
    /// An empty store auditing through the `log` facade.
    pub fn new(registry: &'a IndicatorRegistry) -> Self {
        Self::with_audit(registry, &LogAuditAdapter)
    }

    pub fn with_audit(registry: &'a IndicatorRegistry, audit: &'a dyn AuditPort) -> Self {
        ValueStore {
            registry,
            audit,
            values: HashMap::new(),
        }
    }

    pub fn registry(&self) -> &'a IndicatorRegistry {
        self.registry
    }

    pub fn set_value(&mut self, name: &str, value: impl Into<f64>) -> Result<(), CashflowError> {
        let registry = self.registry;
        let indicator =
            registry
                .definition_for(name)
                .ok_or_else(|| CashflowError::UnknownIndicator {
                    name: name.to_string(),
                })?;
        let value = value.into();

        self.values.insert(indicator.id.clone(), value);
        self.audit.record(&AuditEvent::ValueSet {
            display_name: indicator.display_name.clone(),
            id: indicator.id.clone(),
            value,
        });
        Ok(())
    }

    /// Amount for `name`, or `0.0` when the name is unknown or unset.
    pub fn get_value(&self, name: &str) -> f64 {
        let lookup = self.lookup(name);
        if !lookup.is_resolved() {
            self.audit.record(&AuditEvent::UnresolvedRead {
                name: name.to_string(),
            });
        }
        lookup.value()
    }

    /// Side-effect free read that keeps "unknown" and "unset" apart.
    pub fn lookup(&self, name: &str) -> Lookup<'a> {
        match self.registry.resolve(name) {
            None => Lookup::Unresolved,
            Some(id) => match self.values.get(id) {
                Some(v) => Lookup::Value(*v),
                None => Lookup::Unset { id },
            },
        }
    }

    pub fn is_set(&self, name: &str) -> bool {
        matches!(self.lookup(name), Lookup::Value(_))
    }

    /// Writes a formula result under its canonical id.
    pub(crate) fn store_derived(&mut self, id: &str, value: f64) {
        self.values.insert(id.to_string(), value);
        self.audit.record(&AuditEvent::Derived {
            id: id.to_string(),
            value,
        });
    }

    /// Stored `(id, value)` pairs sorted by id.
    pub fn snapshot(&self) -> Vec<(String, f64)> {
        let mut out: Vec<(String, f64)> = self
            .values
            .iter()
            .map(|(id, v)| (id.clone(), *v))
            .collect();
        out.sort_by(|a, b| a.0.cmp(&b.0));
        out
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
