//! Footprint wizards.
//!
//! A wizard declares a set of parameters and, given values for them, draws a
//! footprint into a [`DrawingContext`]. The build sequence is:
//!
//! 1. [`FootprintWizard::parameters`] declares options with defaults
//! 2. callers override values (config file, command line)
//! 3. [`build`] checks generic constraints and wizard-specific rules
//! 4. the wizard's [`FootprintWizard::build_footprint`] emits primitives
//!
//! Wizards are looked up by name through a [`WizardRegistry`].

pub mod draw;
pub mod params;
pub mod terminal_block;
pub mod transform;

use std::fmt;

use tracing::{debug, info, warn};

pub use draw::{DrawingContext, DrawingStyle};
pub use params::{ParamUnit, ParamValue, Parameter, ParameterManager, ParameterOverride};
pub use terminal_block::TerminalBlockWizard;

use crate::error::{WizardError, WizardResult};
use crate::footprint::Footprint;

/// A parametric footprint generator.
pub trait FootprintWizard: fmt::Debug {
    /// Wizard name, also used as the registry key.
    fn name(&self) -> &str;

    /// One-line description.
    fn description(&self) -> &str;

    /// Prefix of the placeholder reference designator.
    fn reference_prefix(&self) -> &str {
        "REF"
    }

    /// Declares the wizard's parameters.
    fn generate_parameter_list(&self, params: &mut ParameterManager);

    /// Returns wizard-specific problems with the current values.
    ///
    /// Generic constraints (min, max, multiple) are checked separately.
    fn check_parameters(&self, _params: &ParameterManager) -> Vec<String> {
        Vec::new()
    }

    /// Returns the value string (and footprint name) for the current values.
    ///
    /// # Errors
    ///
    /// Returns an error if a required parameter is missing or mistyped.
    fn value(&self, params: &ParameterManager) -> WizardResult<String>;

    /// Draws the footprint.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters describe an impossible layout.
    fn build_footprint(
        &self,
        params: &ParameterManager,
        ctx: &mut DrawingContext,
    ) -> WizardResult<()>;

    /// Returns a fresh parameter set holding the defaults.
    fn parameters(&self) -> ParameterManager {
        let mut params = ParameterManager::new();
        self.generate_parameter_list(&mut params);
        params
    }
}

/// Checks `params` and runs `wizard`, returning the finished footprint.
///
/// # Errors
///
/// Returns [`WizardError::ParameterCheck`] listing every generic and
/// wizard-specific violation, or any error raised while drawing.
pub fn build(wizard: &dyn FootprintWizard, params: &ParameterManager) -> WizardResult<Footprint> {
    let mut errors = params.violations();
    errors.extend(wizard.check_parameters(params));
    if !errors.is_empty() {
        warn!(wizard = wizard.name(), count = errors.len(), "Parameter check failed");
        return Err(WizardError::ParameterCheck { errors });
    }

    let value = wizard.value(params)?;
    info!(wizard = wizard.name(), value = %value, "Building footprint");

    let mut footprint = Footprint::new(value);
    footprint.reference.text = format!("{}**", wizard.reference_prefix());

    let mut ctx = DrawingContext::new(footprint);
    wizard.build_footprint(params, &mut ctx)?;
    let footprint = ctx.into_footprint();

    debug!(
        pads = footprint.pads.len(),
        lines = footprint.lines.len(),
        texts = footprint.texts.len(),
        "Footprint built"
    );
    Ok(footprint)
}

/// Wizards available by name.
#[derive(Debug, Default)]
pub struct WizardRegistry {
    wizards: Vec<Box<dyn FootprintWizard>>,
}

impl WizardRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in wizard drawn with `style`.
    #[must_use]
    pub fn with_builtin(style: DrawingStyle) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(TerminalBlockWizard::with_style(style)));
        registry
    }

    /// Registers a wizard, replacing any wizard of the same name.
    pub fn register(&mut self, wizard: Box<dyn FootprintWizard>) {
        self.wizards
            .retain(|w| !w.name().eq_ignore_ascii_case(wizard.name()));
        debug!(wizard = wizard.name(), "Registered wizard");
        self.wizards.push(wizard);
    }

    /// Looks up a wizard by name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::UnknownWizard`] if no wizard has that name.
    pub fn get(&self, name: &str) -> WizardResult<&dyn FootprintWizard> {
        self.wizards
            .iter()
            .find(|w| w.name().eq_ignore_ascii_case(name))
            .map(|w| &**w)
            .ok_or_else(|| WizardError::unknown_wizard(name))
    }

    /// Returns the registered wizards in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn FootprintWizard> {
        self.wizards.iter().map(|w| &**w)
    }

    /// Returns the number of registered wizards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.wizards.len()
    }

    /// Returns `true` if no wizard is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wizards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::footprint::{Layer, Point};

    /// Draws a single line whose length is the "size" parameter.
    #[derive(Debug)]
    struct LineWizard;

    impl FootprintWizard for LineWizard {
        fn name(&self) -> &str {
            "Line"
        }

        fn description(&self) -> &str {
            "one line"
        }

        fn reference_prefix(&self) -> &str {
            "L"
        }

        fn generate_parameter_list(&self, params: &mut ParameterManager) {
            params
                .add_param("Body", "size", ParamUnit::Millimetres, 2.0)
                .with_min(0.5);
        }

        fn check_parameters(&self, params: &ParameterManager) -> Vec<String> {
            match params.length("Body", "size") {
                Ok(size) if size > 10.0 => vec!["Body/size: too long".to_string()],
                _ => Vec::new(),
            }
        }

        fn value(&self, params: &ParameterManager) -> WizardResult<String> {
            Ok(format!("LINE-{}", params.length("Body", "size")?))
        }

        fn build_footprint(
            &self,
            params: &ParameterManager,
            ctx: &mut DrawingContext,
        ) -> WizardResult<()> {
            let size = params.length("Body", "size")?;
            ctx.set_layer(Layer::FrontFab);
            ctx.line(0.0, 0.0, size, 0.0);
            Ok(())
        }
    }

    #[test]
    fn build_sets_name_value_and_reference() {
        let wizard = LineWizard;
        let footprint = build(&wizard, &wizard.parameters()).unwrap();
        assert_eq!(footprint.name, "LINE-2");
        assert_eq!(footprint.value.text, "LINE-2");
        assert_eq!(footprint.reference.text, "L**");
        assert_eq!(footprint.lines.len(), 1);
        assert_eq!(footprint.lines[0].end, Point::new(2.0, 0.0));
    }

    #[test]
    fn build_reports_generic_and_wizard_violations() {
        let wizard = LineWizard;
        let mut params = wizard.parameters();
        params.set("Body", "size", "0.1").unwrap();
        let Err(WizardError::ParameterCheck { errors }) = build(&wizard, &params) else {
            panic!("expected parameter check failure");
        };
        assert_eq!(errors.len(), 1);

        params.set("Body", "size", "12").unwrap();
        let Err(WizardError::ParameterCheck { errors }) = build(&wizard, &params) else {
            panic!("expected parameter check failure");
        };
        assert_eq!(errors, vec!["Body/size: too long".to_string()]);
    }

    #[test]
    fn registry_lookup_is_case_insensitive() {
        let mut registry = WizardRegistry::new();
        registry.register(Box::new(LineWizard));
        assert!(registry.get("line").is_ok());
        assert!(registry.get("LINE").is_ok());
        assert!(matches!(
            registry.get("circle"),
            Err(WizardError::UnknownWizard { .. })
        ));
    }

    #[test]
    fn registry_replaces_same_name() {
        let mut registry = WizardRegistry::new();
        registry.register(Box::new(LineWizard));
        registry.register(Box::new(LineWizard));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn builtin_registry_has_terminal_block() {
        let registry = WizardRegistry::with_builtin(DrawingStyle::default());
        assert!(!registry.is_empty());
        assert!(registry.get(terminal_block::NAME).is_ok());
    }
}
