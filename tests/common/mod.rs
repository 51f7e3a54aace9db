#![allow(dead_code)]

use cashflow::domain::registry::IndicatorRegistry;
use cashflow::ports::audit_port::{AuditEvent, AuditPort};
use std::cell::RefCell;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub struct RecordingAudit {
    pub events: RefCell<Vec<AuditEvent>>,
}

impl RecordingAudit {
    pub fn new() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
        }
    }

    pub fn unresolved_reads(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                AuditEvent::UnresolvedRead { name } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn sets(&self) -> Vec<(String, String, f64)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                AuditEvent::ValueSet {
                    display_name,
                    id,
                    value,
                } => Some((display_name.clone(), id.clone(), *value)),
                _ => None,
            })
            .collect()
    }

    pub fn derived(&self) -> Vec<(String, f64)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                AuditEvent::Derived { id, value } => Some((id.clone(), *value)),
                _ => None,
            })
            .collect()
    }
}

impl AuditPort for RecordingAudit {
    fn record(&self, event: &AuditEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

pub fn registry() -> IndicatorRegistry {
    init_logging();
    IndicatorRegistry::standard()
}

/// Inputs whose operating CF is 118.
pub const OPERATING_INPUTS: [(&str, f64); 7] = [
    ("net_income", 100.0),
    ("depreciation_expense", 20.0),
    ("net_accounts_receivable", 5.0),
    ("inventory", 10.0),
    ("other_current_assets", 3.0),
    ("current_liabilities", 8.0),
    ("gain_loss_on_disposal_of_PPE", 2.0),
];
