//! Domain error types.

/// Top-level error type for cashflow.
#[derive(Debug, thiserror::Error)]
pub enum CashflowError {
    #[error("unknown indicator name: '{name}'")]
    UnknownIndicator { name: String },

    #[error("alias '{alias}' already resolves to {existing}, cannot bind it to {incoming}")]
    DuplicateAlias {
        alias: String,
        existing: String,
        incoming: String,
    },

    #[error("indicator {id} is already registered")]
    DuplicateIndicator { id: String },

    #[error("invalid indicator: {reason}")]
    InvalidIndicator { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CashflowError {
    /// True for failures caused by the caller naming something the registry
    /// does not know, as opposed to configuration or I/O problems.
    pub fn is_resolution_error(&self) -> bool {
        matches!(self, CashflowError::UnknownIndicator { .. })
    }
}
