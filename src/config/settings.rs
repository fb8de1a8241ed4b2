//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::layout::CourtyardRules;
use crate::wizard::draw::DrawingStyle;
use crate::wizard::params::PageOverrides;

/// Root configuration structure.
///
/// This is the top-level structure that matches the JSON config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Drawing style settings.
    #[serde(default)]
    pub style: StyleConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Parameter overrides: wizard name → page → parameter → value.
    #[serde(default)]
    pub parameters: IndexMap<String, PageOverrides>,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("style.silkscreen_line_width", self.style.silkscreen_line_width),
            ("style.courtyard_line_width", self.style.courtyard_line_width),
            ("style.text_size", self.style.text_size),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValidationError {
                    message: format!("{name} must be a positive number, got {value}"),
                });
            }
        }

        let non_negative = [
            ("style.courtyard_margin", self.style.courtyard_margin),
            ("style.courtyard_grid", self.style.courtyard_grid),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::ValidationError {
                    message: format!("{name} must not be negative, got {value}"),
                });
            }
        }

        Ok(())
    }

    /// Returns the parameter overrides for `wizard` (case-insensitive).
    #[must_use]
    pub fn overrides_for(&self, wizard: &str) -> Option<&PageOverrides> {
        self.parameters
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(wizard))
            .map(|(_, overrides)| overrides)
    }
}

/// Style configuration for generated footprints.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    /// Silkscreen line width in mm.
    #[serde(default = "default_silkscreen_width")]
    pub silkscreen_line_width: f64,

    /// Courtyard line width in mm.
    #[serde(default = "default_courtyard_width")]
    pub courtyard_line_width: f64,

    /// Reference and value text size in mm.
    #[serde(default = "default_text_size")]
    pub text_size: f64,

    /// Courtyard margin in mm (added to each outline dimension).
    #[serde(default = "default_courtyard_margin")]
    pub courtyard_margin: f64,

    /// Grid the courtyard is rounded up to, in mm. 0 disables rounding.
    #[serde(default = "default_courtyard_grid")]
    pub courtyard_grid: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            silkscreen_line_width: default_silkscreen_width(),
            courtyard_line_width: default_courtyard_width(),
            text_size: default_text_size(),
            courtyard_margin: default_courtyard_margin(),
            courtyard_grid: default_courtyard_grid(),
        }
    }
}

impl From<&StyleConfig> for DrawingStyle {
    fn from(style: &StyleConfig) -> Self {
        Self {
            silkscreen_line_width: style.silkscreen_line_width,
            courtyard_line_width: style.courtyard_line_width,
            text_size: style.text_size,
            courtyard: CourtyardRules {
                margin: style.courtyard_margin,
                grid: style.courtyard_grid,
            },
        }
    }
}

fn default_silkscreen_width() -> f64 {
    0.12
}

fn default_courtyard_width() -> f64 {
    0.05
}

fn default_text_size() -> f64 {
    1.0
}

fn default_courtyard_margin() -> f64 {
    0.5
}

fn default_courtyard_grid() -> f64 {
    0.1
}

/// Output format for built footprints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `.kicad_mod` s-expression text.
    #[default]
    Kicad,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Parses an output format from a string.
    ///
    /// Accepts: "kicad", "kicad_mod", "json" (case-insensitive).
    #[must_use]
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "kicad" | "kicad_mod" => Some(Self::Kicad),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let json = r"{}";
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.output.format, OutputFormat::Kicad);
        assert!(config.parameters.is_empty());
    }

    #[test]
    fn parse_full_config() {
        let json = r#"{
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "_comment": "Test config",
            "style": {
                "silkscreen_line_width": 0.15,
                "courtyard_line_width": 0.05,
                "text_size": 1.27,
                "courtyard_margin": 0.25,
                "courtyard_grid": 0.05
            },
            "output": {
                "format": "json"
            },
            "parameters": {
                "KF141R-2.54": {
                    "Pads": { "pad count": 12, "pad pitch": "100mil" }
                }
            },
            "logging": {
                "level": "debug"
            }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_ok());
        assert!((config.style.silkscreen_line_width - 0.15).abs() < f64::EPSILON);
        assert!((config.style.text_size - 1.27).abs() < f64::EPSILON);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.logging.level, "debug");

        let overrides = config.overrides_for("kf141r-2.54").unwrap();
        assert_eq!(overrides["Pads"]["pad count"], serde_json::json!(12));
        assert!(config.overrides_for("other").is_none());
    }

    #[test]
    fn style_config_defaults() {
        let config = StyleConfig::default();
        assert!((config.silkscreen_line_width - 0.12).abs() < f64::EPSILON);
        assert!((config.courtyard_line_width - 0.05).abs() < f64::EPSILON);
        assert!((config.courtyard_margin - 0.5).abs() < f64::EPSILON);
        assert!((config.courtyard_grid - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn style_converts_to_drawing_style() {
        let style = DrawingStyle::from(&StyleConfig::default());
        assert_eq!(style, DrawingStyle::default());
    }

    #[test]
    fn logging_config_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "warn");
    }

    #[test]
    fn output_format_loose_parse() {
        assert_eq!(OutputFormat::from_str_loose("KiCad"), Some(OutputFormat::Kicad));
        assert_eq!(OutputFormat::from_str_loose("kicad_mod"), Some(OutputFormat::Kicad));
        assert_eq!(OutputFormat::from_str_loose("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str_loose("svg"), None);
    }

    #[test]
    fn reject_non_positive_width() {
        let json = r#"{ "style": { "silkscreen_line_width": 0.0 } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn reject_negative_margin() {
        let json = r#"{ "style": { "courtyard_margin": -0.1 } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn reject_unknown_format() {
        let json = r#"{ "output": { "format": "gerber" } }"#;
        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn reject_unknown_fields() {
        let json = r#"{
            "unknown_field": "value"
        }"#;

        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
