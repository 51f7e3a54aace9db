//! Audit adapter that writes events through the `log` facade.

use crate::ports::audit_port::{AuditEvent, AuditPort};

#[derive(Debug, Clone, Copy, Default)]
pub struct LogAuditAdapter;

impl AuditPort for LogAuditAdapter {
    fn record(&self, event: &AuditEvent) {
        match event {
            AuditEvent::ValueSet {
                display_name,
                id,
                value,
            } => log::info!("Set '{}' ({}) = {}", display_name, id, value),
            AuditEvent::UnresolvedRead { name } => {
                log::warn!("Unknown indicator '{}', returning 0.0", name)
            }
            AuditEvent::Derived { id, value } => log::debug!("Derived {} = {}", id, value),
        }
    }
}
