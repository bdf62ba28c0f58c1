//! Error types.
//!
//! Only configuration problems are errors. Ordinary misuse of a running
//! session (tapping a matched card, ticking a finished game) is absorbed
//! as a no-op and never surfaces here.

use thiserror::Error;

/// Errors produced by deck generation and configuration.
#[derive(Debug, Error)]
pub enum MemoryError {
    /// The requested pair count is not one of the supported values.
    #[error("invalid configuration: unsupported pair count {pair_count} (supported: {supported:?})")]
    InvalidConfiguration {
        pair_count: usize,
        supported: Vec<usize>,
    },

    /// A configuration value is semantically invalid.
    #[error("configuration error in `{field}`: {message}")]
    Config { field: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MemoryError {
    pub(crate) fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MemoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_message() {
        let err = MemoryError::InvalidConfiguration {
            pair_count: 4,
            supported: vec![3, 6, 10],
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration: unsupported pair count 4 (supported: [3, 6, 10])"
        );
    }

    #[test]
    fn test_config_message() {
        let err = MemoryError::config("symbols", "must not be empty");
        assert_eq!(
            err.to_string(),
            "configuration error in `symbols`: must not be empty"
        );
    }
}
