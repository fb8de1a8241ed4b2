//! Error types for footprint-wizards.
//!
//! Configuration problems and wizard problems are kept apart: a bad config
//! file stops the CLI before any wizard runs, while a [`WizardError`] is
//! reported per build.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for wizard operations.
pub type WizardResult<T> = Result<T, WizardError>;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },
}

/// Errors raised while declaring, checking or building a footprint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    /// No wizard is registered under this name.
    #[error("Unknown wizard: {name}")]
    UnknownWizard {
        /// Name that was looked up.
        name: String,
    },

    /// Parameter was never declared by the wizard.
    #[error("Unknown parameter '{name}' on page '{page}'")]
    UnknownParameter {
        /// Parameter page.
        page: String,
        /// Parameter name.
        name: String,
    },

    /// A parameter name matched more than one page.
    #[error("Ambiguous parameter '{name}': present on pages {pages:?}")]
    AmbiguousParameter {
        /// Parameter name.
        name: String,
        /// Every page declaring that name.
        pages: Vec<String>,
    },

    /// Value could not be parsed or has the wrong type.
    #[error("Invalid value for '{page}/{name}': {message}")]
    InvalidValue {
        /// Parameter page.
        page: String,
        /// Parameter name.
        name: String,
        /// Description of what's wrong.
        message: String,
    },

    /// One or more parameters failed their constraints.
    #[error("Parameter check failed: {}", .errors.join("; "))]
    ParameterCheck {
        /// Every violation found, in declaration order.
        errors: Vec<String>,
    },

    /// Layout inputs describe an impossible pad arrangement.
    #[error("Invalid layout: {message}")]
    InvalidLayout {
        /// Description of what's wrong.
        message: String,
    },
}

impl WizardError {
    /// Creates an unknown wizard error.
    pub fn unknown_wizard(name: impl Into<String>) -> Self {
        Self::UnknownWizard { name: name.into() }
    }

    /// Creates an unknown parameter error.
    pub fn unknown_parameter(page: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnknownParameter {
            page: page.into(),
            name: name.into(),
        }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(
        page: impl Into<String>,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            page: page.into(),
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid layout error.
    pub fn invalid_layout(message: impl Into<String>) -> Self {
        Self::InvalidLayout {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let error = ConfigError::NotFound {
            path: PathBuf::from("/path/to/config.json"),
        };
        let msg = error.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("config.json"));
    }

    #[test]
    fn validation_error_display() {
        let error = ConfigError::ValidationError {
            message: "invalid setting".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("invalid setting"));
    }

    #[test]
    fn parameter_check_joins_messages() {
        let err = WizardError::ParameterCheck {
            errors: vec!["pad count: odd".to_string(), "drill size: too big".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Parameter check failed: pad count: odd; drill size: too big"
        );
    }

    #[test]
    fn invalid_value_display() {
        let err = WizardError::invalid_value("Pads", "pad pitch", "not a number");
        assert_eq!(
            err.to_string(),
            "Invalid value for 'Pads/pad pitch': not a number"
        );
    }
}
