//! Indicator registry: canonical definitions plus the alias index.
//!
//! The registry is built once and then only read. Every store borrows it, so
//! any number of independent stores can share one registry.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::chart_of_accounts::{CatalogEntry, CHART_OF_ACCOUNTS};
use crate::domain::error::CashflowError;
use crate::domain::indicator::{normalize, Indicator};

/// What registration does when a normalized spelling is already bound to a
/// different canonical id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Last registration wins; the rebinding is logged.
    #[default]
    Overwrite,
    /// Registration fails and the registry is left untouched.
    Reject,
}

impl FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "overwrite" => Ok(DuplicatePolicy::Overwrite),
            "reject" => Ok(DuplicatePolicy::Reject),
            other => Err(format!("expected overwrite or reject, got '{other}'")),
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicatePolicy::Overwrite => write!(f, "overwrite"),
            DuplicatePolicy::Reject => write!(f, "reject"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IndicatorRegistry {
    policy: DuplicatePolicy,
    definitions: Vec<Indicator>,
    positions: HashMap<String, usize>,
    alias_index: HashMap<String, String>,
}

impl IndicatorRegistry {
    /// An empty registry.
    pub fn new(policy: DuplicatePolicy) -> Self {
        IndicatorRegistry {
            policy,
            ..Default::default()
        }
    }

    /// The registry populated with the builtin chart of accounts.
    pub fn standard() -> Self {
        let mut registry = Self::new(DuplicatePolicy::Overwrite);
        for (id, display_name, aliases) in CHART_OF_ACCOUNTS {
            if let Err(e) = registry.register(id, display_name, aliases.iter()) {
                log::error!("skipping catalog entry {}: {}", id, e);
            }
        }
        log::debug!(
            "chart of accounts registered: {} indicators, {} spellings",
            registry.len(),
            registry.alias_index.len()
        );
        registry
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Registers every entry of `catalog` in order, under this registry's
    /// policy. Stops at the first failure.
    pub fn register_catalog(&mut self, catalog: &[CatalogEntry]) -> Result<(), CashflowError> {
        for (id, display_name, aliases) in catalog {
            self.register(id, display_name, aliases.iter())?;
        }
        Ok(())
    }

    pub fn register<I, S>(
        &mut self,
        id: &str,
        display_name: &str,
        aliases: I,
    ) -> Result<(), CashflowError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.register_indicator(Indicator::new(id, display_name, aliases))
    }

    /// Validates `indicator` against the current state and the duplicate
    /// policy, then binds it. Nothing is modified when an error is returned.
    pub fn register_indicator(&mut self, indicator: Indicator) -> Result<(), CashflowError> {
        let indicator = indicator.normalized();
        validate_indicator(&indicator)?;

        if self.positions.contains_key(&indicator.id) && self.policy == DuplicatePolicy::Reject {
            return Err(CashflowError::DuplicateIndicator {
                id: indicator.id.clone(),
            });
        }

        if self.policy == DuplicatePolicy::Reject {
            for spelling in indicator.spellings() {
                if let Some(existing) = self.alias_index.get(&spelling) {
                    if *existing != indicator.id {
                        return Err(CashflowError::DuplicateAlias {
                            alias: spelling,
                            existing: existing.clone(),
                            incoming: indicator.id.clone(),
                        });
                    }
                }
            }
        }

        self.bind(indicator);
        Ok(())
    }

    fn bind(&mut self, indicator: Indicator) {
        for spelling in indicator.spellings() {
            if let Some(previous) = self.alias_index.insert(spelling.clone(), indicator.id.clone()) {
                if previous != indicator.id {
                    log::warn!(
                        "alias '{}' rebound from {} to {}",
                        spelling,
                        previous,
                        indicator.id
                    );
                }
            }
        }

        match self.positions.get(&indicator.id) {
            Some(&pos) => {
                log::warn!("indicator {} redefined", indicator.id);
                self.definitions[pos] = indicator;
            }
            None => {
                self.positions
                    .insert(indicator.id.clone(), self.definitions.len());
                self.definitions.push(indicator);
            }
        }
    }

    /// Canonical id for any accepted spelling, ignoring case and surrounding
    /// whitespace.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.alias_index.get(&normalize(name)).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Definition by exact canonical id.
    pub fn definition(&self, id: &str) -> Option<&Indicator> {
        self.positions.get(id).map(|&pos| &self.definitions[pos])
    }

    /// Definition by any accepted spelling.
    pub fn definition_for(&self, name: &str) -> Option<&Indicator> {
        self.resolve(name).and_then(|id| self.definition(id))
    }

    /// All normalized spellings currently resolving to `id`, sorted.
    pub fn aliases_of(&self, id: &str) -> Vec<&str> {
        let mut out: Vec<&str> = self
            .alias_index
            .iter()
            .filter(|(_, target)| target.as_str() == id)
            .map(|(alias, _)| alias.as_str())
            .collect();
        out.sort_unstable();
        out
    }

    /// Definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Indicator> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

fn validate_indicator(indicator: &Indicator) -> Result<(), CashflowError> {
    if indicator.id.is_empty() {
        return Err(CashflowError::InvalidIndicator {
            reason: "id must not be empty".to_string(),
        });
    }
    if indicator.display_name.is_empty() {
        return Err(CashflowError::InvalidIndicator {
            reason: format!("{} has an empty display name", indicator.id),
        });
    }
    if indicator.aliases.iter().any(|a| a.is_empty()) {
        return Err(CashflowError::InvalidIndicator {
            reason: format!("{} has an empty alias", indicator.id),
        });
    }
    Ok(())
}
