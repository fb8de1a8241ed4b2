//! Wizard parameters.
//!
//! Wizards declare their options on named pages. Each parameter has a unit,
//! a default, and optional constraints (minimum, maximum, multiple). Values
//! can be set from text (`"2.54"`, `"2.54mm"`, `"100mil"`, `"true"`) or from
//! JSON, and [`ParameterManager::check`] reports every constraint violation
//! at once.
//!
//! Length parameters keep their value in the declared unit; use
//! [`ParameterManager::length`] to read them in millimetres.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{WizardError, WizardResult};

/// Millimetres per mil.
pub const MM_PER_MIL: f64 = 0.0254;

/// Declared unit of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamUnit {
    /// Length in millimetres.
    Millimetres,
    /// Length in mils (thousandths of an inch).
    Mils,
    /// Unitless real number.
    Float,
    /// Whole number.
    Integer,
    /// Flag.
    Bool,
    /// Free text.
    String,
}

impl ParamUnit {
    /// Returns the short unit label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Millimetres => "mm",
            Self::Mils => "mils",
            Self::Float => "float",
            Self::Integer => "integer",
            Self::Bool => "bool",
            Self::String => "string",
        }
    }

    const fn is_numeric(self) -> bool {
        matches!(self, Self::Millimetres | Self::Mils | Self::Float)
    }
}

impl fmt::Display for ParamUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parameter value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Real number (lengths, floats).
    Number(f64),
    /// Whole number.
    Integer(i64),
    /// Flag.
    Bool(bool),
    /// Text.
    Text(String),
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v:?}"),
        }
    }
}

/// A declared wizard parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    /// Page the parameter belongs to.
    pub page: String,
    /// Parameter name.
    pub name: String,
    /// Declared unit.
    pub unit: ParamUnit,
    /// Current value.
    pub value: ParamValue,
    /// Default value.
    pub default: ParamValue,
    /// Help text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Short symbol used on drawings (e.g. "e" for pitch).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designator: Option<String>,
    /// Inclusive minimum.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    /// Inclusive maximum.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    /// Integer values must be a multiple of this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple: Option<i64>,
}

impl Parameter {
    /// Sets the inclusive minimum.
    pub fn with_min(&mut self, min: f64) -> &mut Self {
        self.min_value = Some(min);
        self
    }

    /// Sets the inclusive maximum.
    pub fn with_max(&mut self, max: f64) -> &mut Self {
        self.max_value = Some(max);
        self
    }

    /// Requires integer values to be a multiple of `multiple`.
    pub fn with_multiple(&mut self, multiple: i64) -> &mut Self {
        self.multiple = Some(multiple);
        self
    }

    /// Sets the help text.
    pub fn with_hint(&mut self, hint: impl Into<String>) -> &mut Self {
        self.hint = Some(hint.into());
        self
    }

    /// Sets the drawing designator.
    pub fn with_designator(&mut self, designator: impl Into<String>) -> &mut Self {
        self.designator = Some(designator.into());
        self
    }

    /// Returns the value as a number, if numeric.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self.value {
            ParamValue::Number(v) => Some(v),
            ParamValue::Integer(v) => Some(v as f64),
            _ => None,
        }
    }

    /// Parses `raw` according to the declared unit.
    ///
    /// Length parameters accept an optional `mm` or `mil`/`mils` suffix and
    /// convert to the declared unit.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::InvalidValue`] if `raw` does not parse.
    pub fn parse(&self, raw: &str) -> WizardResult<ParamValue> {
        let raw = raw.trim();
        let invalid = |message: String| WizardError::invalid_value(&self.page, &self.name, message);

        match self.unit {
            ParamUnit::Millimetres | ParamUnit::Mils => {
                let (number, factor) = split_length(raw, self.unit);
                parse_finite(number)
                    .map(|v| ParamValue::Number(v * factor))
                    .ok_or_else(|| invalid(format!("'{raw}' is not a length")))
            }
            ParamUnit::Float => parse_finite(raw)
                .map(ParamValue::Number)
                .ok_or_else(|| invalid(format!("'{raw}' is not a number"))),
            ParamUnit::Integer => raw
                .parse::<i64>()
                .map(ParamValue::Integer)
                .map_err(|_| invalid(format!("'{raw}' is not an integer"))),
            ParamUnit::Bool => match raw.to_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Ok(ParamValue::Bool(true)),
                "false" | "no" | "off" | "0" => Ok(ParamValue::Bool(false)),
                _ => Err(invalid(format!("'{raw}' is not a boolean"))),
            },
            ParamUnit::String => Ok(ParamValue::Text(raw.to_string())),
        }
    }

    /// Coerces `value` to the declared unit.
    ///
    /// Integers are accepted for numeric units; everything else must match.
    #[allow(clippy::cast_precision_loss)]
    fn coerce(&self, value: ParamValue) -> WizardResult<ParamValue> {
        match (self.unit, value) {
            (unit, ParamValue::Number(v)) if unit.is_numeric() => {
                if v.is_finite() {
                    Ok(ParamValue::Number(v))
                } else {
                    Err(WizardError::invalid_value(
                        &self.page,
                        &self.name,
                        "value must be finite",
                    ))
                }
            }
            (unit, ParamValue::Integer(v)) if unit.is_numeric() => Ok(ParamValue::Number(v as f64)),
            (ParamUnit::Integer, v @ ParamValue::Integer(_))
            | (ParamUnit::Bool, v @ ParamValue::Bool(_))
            | (ParamUnit::String, v @ ParamValue::Text(_)) => Ok(v),
            (unit, other) => Err(WizardError::invalid_value(
                &self.page,
                &self.name,
                format!("expected {unit}, got {other}"),
            )),
        }
    }

    /// Returns every constraint this parameter violates.
    #[must_use]
    pub fn violations(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let label = format!("{}/{}", self.page, self.name);

        if let Some(v) = self.as_f64() {
            if let Some(min) = self.min_value {
                if v < min {
                    errors.push(format!("{label}: {v} is below the minimum {min}"));
                }
            }
            if let Some(max) = self.max_value {
                if v > max {
                    errors.push(format!("{label}: {v} is above the maximum {max}"));
                }
            }
        }

        if let (ParamValue::Integer(v), Some(multiple)) = (&self.value, self.multiple) {
            if multiple != 0 && v % multiple != 0 {
                errors.push(format!("{label}: {v} is not a multiple of {multiple}"));
            }
        }

        errors
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {} ({}", self.name, self.value, self.unit)?;
        if let Some(min) = self.min_value {
            write!(f, ", min {min}")?;
        }
        if let Some(max) = self.max_value {
            write!(f, ", max {max}")?;
        }
        if let Some(multiple) = self.multiple {
            write!(f, ", multiple of {multiple}")?;
        }
        write!(f, ")")
    }
}

/// Splits a unit suffix off a length and returns the factor converting the
/// number to `unit`.
fn split_length(raw: &str, unit: ParamUnit) -> (&str, f64) {
    let to_unit_from_mm = if unit == ParamUnit::Mils { 1.0 / MM_PER_MIL } else { 1.0 };
    let to_unit_from_mil = if unit == ParamUnit::Mils { 1.0 } else { MM_PER_MIL };

    if let Some(number) = raw.strip_suffix("mm") {
        (number.trim(), to_unit_from_mm)
    } else if let Some(number) = raw.strip_suffix("mils").or_else(|| raw.strip_suffix("mil")) {
        (number.trim(), to_unit_from_mil)
    } else {
        (raw, 1.0)
    }
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A `[PAGE:]NAME=VALUE` assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterOverride {
    /// Page, if given.
    pub page: Option<String>,
    /// Parameter name.
    pub name: String,
    /// Raw value text.
    pub value: String,
}

impl FromStr for ParameterOverride {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s.split_once('=').ok_or_else(|| {
            WizardError::invalid_value("", s, "expected [PAGE:]NAME=VALUE")
        })?;
        let (page, name) = match key.split_once(':') {
            Some((page, name)) => (Some(page.trim().to_string()), name.trim()),
            None => (None, key.trim()),
        };
        if name.is_empty() {
            return Err(WizardError::invalid_value(
                page.unwrap_or_default(),
                "",
                "parameter name is empty",
            ));
        }
        Ok(Self {
            page,
            name: name.to_string(),
            value: value.trim().to_string(),
        })
    }
}

/// Per-page JSON overrides: page → name → value.
pub type PageOverrides = IndexMap<String, IndexMap<String, serde_json::Value>>;

/// Declared parameters of one wizard, grouped by page in declaration order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ParameterManager {
    pages: IndexMap<String, IndexMap<String, Parameter>>,
}

impl ParameterManager {
    /// Creates an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a parameter and returns it for further configuration.
    ///
    /// Re-declaring an existing parameter replaces it.
    pub fn add_param(
        &mut self,
        page: &str,
        name: &str,
        unit: ParamUnit,
        default: impl Into<ParamValue>,
    ) -> &mut Parameter {
        let default = default.into();
        let param = Parameter {
            page: page.to_string(),
            name: name.to_string(),
            unit,
            value: default.clone(),
            default,
            hint: None,
            designator: None,
            min_value: None,
            max_value: None,
            multiple: None,
        };
        let entries = self.pages.entry(page.to_string()).or_default();
        let (index, _) = entries.insert_full(name.to_string(), param);
        &mut entries[index]
    }

    /// Returns a parameter.
    #[must_use]
    pub fn get(&self, page: &str, name: &str) -> Option<&Parameter> {
        self.pages.get(page).and_then(|p| p.get(name))
    }

    fn get_mut(&mut self, page: &str, name: &str) -> WizardResult<&mut Parameter> {
        self.pages
            .get_mut(page)
            .and_then(|p| p.get_mut(name))
            .ok_or_else(|| WizardError::unknown_parameter(page, name))
    }

    fn require(&self, page: &str, name: &str) -> WizardResult<&Parameter> {
        self.get(page, name)
            .ok_or_else(|| WizardError::unknown_parameter(page, name))
    }

    /// Finds a parameter by name alone.
    ///
    /// # Errors
    ///
    /// Returns an error if no page, or more than one page, declares `name`.
    pub fn find(&self, name: &str) -> WizardResult<&Parameter> {
        let matches: Vec<&Parameter> = self
            .pages
            .values()
            .filter_map(|params| params.get(name))
            .collect();
        match matches.as_slice() {
            [param] => Ok(param),
            [] => Err(WizardError::unknown_parameter("*", name)),
            many => Err(WizardError::AmbiguousParameter {
                name: name.to_string(),
                pages: many.iter().map(|p| p.page.clone()).collect(),
            }),
        }
    }

    /// Returns the page names in declaration order.
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    /// Returns every parameter in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.pages.values().flat_map(IndexMap::values)
    }

    /// Returns the parameters on `page` in declaration order.
    pub fn page(&self, page: &str) -> impl Iterator<Item = &Parameter> {
        self.pages.get(page).into_iter().flat_map(IndexMap::values)
    }

    /// Sets a parameter from text.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is unknown or the text does not parse.
    pub fn set(&mut self, page: &str, name: &str, raw: &str) -> WizardResult<()> {
        let param = self.get_mut(page, name)?;
        param.value = param.parse(raw)?;
        Ok(())
    }

    /// Sets a parameter from a typed value.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is unknown or the value has the
    /// wrong type.
    pub fn set_value(&mut self, page: &str, name: &str, value: impl Into<ParamValue>) -> WizardResult<()> {
        let param = self.get_mut(page, name)?;
        param.value = param.coerce(value.into())?;
        Ok(())
    }

    /// Applies a `[PAGE:]NAME=VALUE` assignment.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is unknown or ambiguous, or the value
    /// does not parse.
    pub fn apply(&mut self, assignment: &ParameterOverride) -> WizardResult<()> {
        let page = match &assignment.page {
            Some(page) => page.clone(),
            None => self.find(&assignment.name)?.page.clone(),
        };
        self.set(&page, &assignment.name, &assignment.value)
    }

    /// Applies JSON overrides (e.g. from the configuration file).
    ///
    /// Strings are parsed like command-line values, so `"100mil"` works.
    ///
    /// # Errors
    ///
    /// Returns an error on the first unknown parameter or bad value.
    pub fn apply_json(&mut self, overrides: &PageOverrides) -> WizardResult<()> {
        for (page, values) in overrides {
            for (name, value) in values {
                match value {
                    serde_json::Value::String(raw) => self.set(page, name, raw)?,
                    serde_json::Value::Bool(b) => self.set_value(page, name, *b)?,
                    serde_json::Value::Number(n) => {
                        let typed = match n.as_i64() {
                            Some(i) => ParamValue::Integer(i),
                            None => ParamValue::Number(n.as_f64().unwrap_or(f64::NAN)),
                        };
                        self.set_value(page, name, typed)?;
                    }
                    other => {
                        return Err(WizardError::invalid_value(
                            page,
                            name,
                            format!("unsupported JSON value {other}"),
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    /// Restores every parameter to its default.
    pub fn reset_defaults(&mut self) {
        for param in self.pages.values_mut().flat_map(IndexMap::values_mut) {
            param.value = param.default.clone();
        }
    }

    /// Returns a length parameter in millimetres.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is unknown or not a length.
    pub fn length(&self, page: &str, name: &str) -> WizardResult<f64> {
        let param = self.require(page, name)?;
        match (param.unit, &param.value) {
            (ParamUnit::Millimetres, ParamValue::Number(v)) => Ok(*v),
            (ParamUnit::Mils, ParamValue::Number(v)) => Ok(v * MM_PER_MIL),
            _ => Err(WizardError::invalid_value(page, name, "not a length")),
        }
    }

    /// Returns a float parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is unknown or not numeric.
    pub fn float(&self, page: &str, name: &str) -> WizardResult<f64> {
        self.require(page, name)?
            .as_f64()
            .ok_or_else(|| WizardError::invalid_value(page, name, "not a number"))
    }

    /// Returns an integer parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is unknown or not an integer.
    pub fn integer(&self, page: &str, name: &str) -> WizardResult<i64> {
        match self.require(page, name)?.value {
            ParamValue::Integer(v) => Ok(v),
            _ => Err(WizardError::invalid_value(page, name, "not an integer")),
        }
    }

    /// Returns a boolean parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is unknown or not a flag.
    pub fn boolean(&self, page: &str, name: &str) -> WizardResult<bool> {
        match self.require(page, name)?.value {
            ParamValue::Bool(v) => Ok(v),
            _ => Err(WizardError::invalid_value(page, name, "not a boolean")),
        }
    }

    /// Returns a text parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is unknown or not text.
    pub fn text(&self, page: &str, name: &str) -> WizardResult<&str> {
        match &self.require(page, name)?.value {
            ParamValue::Text(v) => Ok(v),
            _ => Err(WizardError::invalid_value(page, name, "not text")),
        }
    }

    /// Returns every constraint violation across all parameters.
    #[must_use]
    pub fn violations(&self) -> Vec<String> {
        self.iter().flat_map(Parameter::violations).collect()
    }

    /// Checks every parameter against its constraints.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::ParameterCheck`] listing every violation.
    pub fn check(&self) -> WizardResult<()> {
        let errors = self.violations();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(WizardError::ParameterCheck { errors })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> ParameterManager {
        let mut params = ParameterManager::new();
        params
            .add_param("Pads", "pad count", ParamUnit::Integer, 8_i64)
            .with_min(2.0)
            .with_multiple(2);
        params.add_param("Pads", "pad pitch", ParamUnit::Millimetres, 2.54);
        params.add_param("Pads", "clearance", ParamUnit::Mils, 10.0);
        params.add_param("Body", "outline", ParamUnit::Bool, true);
        params.add_param("Body", "label", ParamUnit::String, "KF");
        params
    }

    #[test]
    fn declaration_order_preserved() {
        let params = manager();
        let pages: Vec<&str> = params.pages().collect();
        assert_eq!(pages, vec!["Pads", "Body"]);
        let names: Vec<&str> = params.page("Pads").map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["pad count", "pad pitch", "clearance"]);
    }

    #[test]
    fn typed_accessors() {
        let params = manager();
        assert_eq!(params.integer("Pads", "pad count"), Ok(8));
        assert!((params.length("Pads", "pad pitch").unwrap() - 2.54).abs() < f64::EPSILON);
        assert!((params.length("Pads", "clearance").unwrap() - 0.254).abs() < 1e-12);
        assert_eq!(params.boolean("Body", "outline"), Ok(true));
        assert_eq!(params.text("Body", "label"), Ok("KF"));
        assert!(params.integer("Pads", "pad pitch").is_err());
        assert!(params.length("Nope", "pad pitch").is_err());
    }

    #[test]
    fn set_from_text_with_units() {
        let mut params = manager();
        params.set("Pads", "pad pitch", "100mil").unwrap();
        assert!((params.length("Pads", "pad pitch").unwrap() - 2.54).abs() < 1e-12);

        params.set("Pads", "pad pitch", "5.08 mm").unwrap();
        assert!((params.length("Pads", "pad pitch").unwrap() - 5.08).abs() < 1e-12);

        params.set("Pads", "clearance", "0.254mm").unwrap();
        assert!((params.float("Pads", "clearance").unwrap() - 10.0).abs() < 1e-9);

        params.set("Body", "outline", "no").unwrap();
        assert_eq!(params.boolean("Body", "outline"), Ok(false));
    }

    #[test]
    fn bad_text_rejected() {
        let mut params = manager();
        assert!(params.set("Pads", "pad count", "8.5").is_err());
        assert!(params.set("Pads", "pad pitch", "wide").is_err());
        assert!(params.set("Pads", "pad pitch", "inf").is_err());
        assert!(params.set("Body", "outline", "maybe").is_err());
        assert!(matches!(
            params.set("Pads", "missing", "1"),
            Err(WizardError::UnknownParameter { .. })
        ));
    }

    #[test]
    fn set_value_coerces_integers() {
        let mut params = manager();
        params.set_value("Pads", "pad pitch", 3_i64).unwrap();
        assert!((params.length("Pads", "pad pitch").unwrap() - 3.0).abs() < f64::EPSILON);
        assert!(params.set_value("Pads", "pad count", 2.5).is_err());
        assert!(params.set_value("Body", "outline", "yes").is_err());
    }

    #[test]
    fn check_collects_all_violations() {
        let mut params = manager();
        params.set("Pads", "pad count", "7").unwrap();
        assert!(params.check().is_err());

        params.set("Pads", "pad count", "0").unwrap();
        let Err(WizardError::ParameterCheck { errors }) = params.check() else {
            panic!("expected parameter check failure");
        };
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("below the minimum"));

        params.set("Pads", "pad count", "-3").unwrap();
        let Err(WizardError::ParameterCheck { errors }) = params.check() else {
            panic!("expected parameter check failure");
        };
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut params = manager();
        params.set("Pads", "pad count", "12").unwrap();
        params.reset_defaults();
        assert_eq!(params.integer("Pads", "pad count"), Ok(8));
    }

    #[test]
    fn override_parsing() {
        let o: ParameterOverride = "Pads:pad count=10".parse().unwrap();
        assert_eq!(o.page.as_deref(), Some("Pads"));
        assert_eq!(o.name, "pad count");
        assert_eq!(o.value, "10");

        let o: ParameterOverride = "pad pitch = 100mil".parse().unwrap();
        assert!(o.page.is_none());
        assert_eq!(o.name, "pad pitch");
        assert_eq!(o.value, "100mil");

        assert!("no-equals".parse::<ParameterOverride>().is_err());
        assert!("=5".parse::<ParameterOverride>().is_err());
    }

    #[test]
    fn apply_without_page_finds_unique_name() {
        let mut params = manager();
        params.apply(&"pad count=4".parse().unwrap()).unwrap();
        assert_eq!(params.integer("Pads", "pad count"), Ok(4));

        params.add_param("Body", "pad count", ParamUnit::Integer, 1_i64);
        assert!(matches!(
            params.apply(&"pad count=6".parse().unwrap()),
            Err(WizardError::AmbiguousParameter { .. })
        ));
    }

    #[test]
    fn apply_json_overrides() {
        let mut params = manager();
        let overrides: PageOverrides = serde_json::from_str(
            r#"{
                "Pads": { "pad count": 12, "pad pitch": "200mil" },
                "Body": { "outline": false }
            }"#,
        )
        .unwrap();
        params.apply_json(&overrides).unwrap();
        assert_eq!(params.integer("Pads", "pad count"), Ok(12));
        assert!((params.length("Pads", "pad pitch").unwrap() - 5.08).abs() < 1e-12);
        assert_eq!(params.boolean("Body", "outline"), Ok(false));
    }

    #[test]
    fn apply_json_rejects_arrays() {
        let mut params = manager();
        let overrides: PageOverrides =
            serde_json::from_str(r#"{ "Pads": { "pad count": [1, 2] } }"#).unwrap();
        assert!(params.apply_json(&overrides).is_err());
    }

    #[test]
    fn display_lists_constraints() {
        let params = manager();
        let text = params.get("Pads", "pad count").unwrap().to_string();
        assert_eq!(text, "pad count = 8 (integer, min 2, multiple of 2)");
    }
}
