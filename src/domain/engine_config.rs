//! Registry configuration.
//!
//! Reads the `[registry]` section and any number of `[indicator:<id>]`
//! sections, validates them, and builds the registry they describe.

use crate::domain::chart_of_accounts::CHART_OF_ACCOUNTS;
use crate::domain::error::CashflowError;
use crate::domain::indicator::Indicator;
use crate::domain::registry::{DuplicatePolicy, IndicatorRegistry};
use crate::ports::config_port::ConfigPort;

pub const REGISTRY_SECTION: &str = "registry";
pub const INDICATOR_SECTION_PREFIX: &str = "indicator:";

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub on_duplicate: DuplicatePolicy,
    pub include_builtin: bool,
    pub extra_indicators: Vec<Indicator>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            on_duplicate: DuplicatePolicy::Overwrite,
            include_builtin: true,
            extra_indicators: Vec::new(),
        }
    }
}

pub fn build_engine_config(config: &dyn ConfigPort) -> Result<EngineConfig, CashflowError> {
    let on_duplicate = parse_policy(config)?;
    let include_builtin = config.get_bool(REGISTRY_SECTION, "include_builtin", true);

    let mut extra_indicators = Vec::new();
    for section in config.sections() {
        if let Some(id) = section.strip_prefix(INDICATOR_SECTION_PREFIX) {
            extra_indicators.push(parse_indicator(config, &section, id)?);
        }
    }

    Ok(EngineConfig {
        on_duplicate,
        include_builtin,
        extra_indicators,
    })
}

fn parse_policy(config: &dyn ConfigPort) -> Result<DuplicatePolicy, CashflowError> {
    match config.get_string(REGISTRY_SECTION, "on_duplicate") {
        None => Ok(DuplicatePolicy::default()),
        Some(raw) => raw.parse::<DuplicatePolicy>().map_err(|reason| CashflowError::ConfigInvalid {
            section: REGISTRY_SECTION.to_string(),
            key: "on_duplicate".to_string(),
            reason,
        }),
    }
}

fn parse_indicator(
    config: &dyn ConfigPort,
    section: &str,
    id: &str,
) -> Result<Indicator, CashflowError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(CashflowError::ConfigInvalid {
            section: section.to_string(),
            key: "id".to_string(),
            reason: "indicator id must not be empty".to_string(),
        });
    }

    let display_name = match config.get_string(section, "display_name") {
        Some(s) if !s.trim().is_empty() => s,
        _ => {
            return Err(CashflowError::ConfigMissing {
                section: section.to_string(),
                key: "display_name".to_string(),
            });
        }
    };

    let aliases = config.get_list(section, "aliases").unwrap_or_default();
    if aliases.iter().any(|a| a.is_empty()) {
        return Err(CashflowError::ConfigInvalid {
            section: section.to_string(),
            key: "aliases".to_string(),
            reason: "empty alias in list".to_string(),
        });
    }

    Ok(Indicator::new(id, &display_name, aliases))
}

impl IndicatorRegistry {
    /// Builtin catalog (unless excluded), then the configured extras, all
    /// under the configured duplicate policy.
    pub fn from_config(config: &EngineConfig) -> Result<Self, CashflowError> {
        let mut registry = IndicatorRegistry::new(config.on_duplicate);
        if config.include_builtin {
            registry.register_catalog(CHART_OF_ACCOUNTS)?;
        }
        for indicator in &config.extra_indicators {
            registry.register_indicator(indicator.clone())?;
        }
        log::debug!(
            "registry built: {} indicators, policy {}",
            registry.len(),
            registry.policy()
        );
        Ok(registry)
    }
}
