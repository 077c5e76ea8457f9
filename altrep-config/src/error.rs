//! Error types of altrep-config

use std::fmt;

/// Unified error type for altrep-config
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// File I/O error
    FileRead { path: String, message: String },
    /// TOML parsing error
    TomlParse { path: String, message: String },
    /// Validation error with context
    Validation { field: String, message: String },
    /// Key name that is neither an alias nor a single character
    UnknownKey { field: String, name: String },
    /// Profile name that doesn't exist
    UnknownProfile { field: String, name: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileRead { path, message } => {
                write!(f, "Failed to read config file '{}': {}", path, message)
            }
            ConfigError::TomlParse { path, message } => {
                write!(f, "Failed to parse '{}': {}", path, message)
            }
            ConfigError::Validation { field, message } => {
                write!(f, "Validation error in '{}': {}", field, message)
            }
            ConfigError::UnknownKey { field, name } => {
                write!(f, "Unknown key '{}' in '{}'", name, field)
            }
            ConfigError::UnknownProfile { field, name } => {
                write!(f, "Unknown profile '{}' in '{}'", name, field)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
