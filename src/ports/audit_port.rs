//! Audit port: the observable side channel of the value store.

#[derive(Debug, Clone, PartialEq)]
pub enum AuditEvent {
    /// A caller-supplied value was stored.
    ValueSet {
        display_name: String,
        id: String,
        value: f64,
    },
    /// A read named nothing the registry knows; the read returned 0.0.
    UnresolvedRead { name: String },
    /// A formula wrote a derived total.
    Derived { id: String, value: f64 },
}

pub trait AuditPort {
    fn record(&self, event: &AuditEvent);
}
