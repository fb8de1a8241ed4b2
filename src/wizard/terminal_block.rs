//! Staggered two-row PCB terminal block wizard.
//!
//! Generates footprints for Cixi Kefa Elec KF141R-2.54 or Phoenix Contact
//! MFFKDSA1/H-2,54 series terminal blocks: two lines of through-hole pads in
//! a zig-zag, a silkscreen housing outline with one separator per position,
//! a courtyard, and reference/value texts above and below the housing.

use tracing::debug;

use crate::error::{WizardError, WizardResult};
use crate::footprint::{FootprintAttribute, Layer, Pad, PadShape, Point, Text, TextKind};
use crate::layout::{BodyOutline, StaggeredPadArray};
use crate::wizard::draw::{DrawingContext, DrawingStyle};
use crate::wizard::params::{ParamUnit, ParameterManager};
use crate::wizard::FootprintWizard;

/// Wizard name.
pub const NAME: &str = "KF141R-2.54";

const DESCRIPTION: &str = "PCB terminal block Cixi Kefa Elec KF141R-2.54 or Phoenix Contact \
                           MFFKDSA1/H-2,54, footprint wizard";

/// Page holding every pad option.
pub const PADS_PAGE: &str = "Pads";
/// Total number of pads (both lines).
pub const PAD_COUNT_KEY: &str = "pad count";
/// Horizontal pad size.
pub const PAD_WIDTH_KEY: &str = "pad width";
/// Vertical pad size.
pub const PAD_LENGTH_KEY: &str = "pad length";
/// Distance between positions along a line.
pub const PAD_PITCH_KEY: &str = "pad pitch";
/// Distance between the two lines.
pub const ROW_SPACING_KEY: &str = "row spacing";
/// X shift of the second line.
pub const STAGGER_OFFSET_KEY: &str = "stagger_offset";
/// Drill diameter.
pub const PAD_DRILL_KEY: &str = "drill size";

const LINE_COUNT: usize = 2;

/// Largest pad count offered (100 positions).
pub const MAX_PADS: i64 = 200;
/// Largest magnitude accepted for any length option (mm).
pub const MAX_LENGTH_MM: f64 = 100.0;

/// Fab-layer text that mirrors the reference designator.
const FAB_REFERENCE: &str = "${REFERENCE}";

/// The KF141R-2.54 terminal block wizard.
#[derive(Debug, Clone, Default)]
pub struct TerminalBlockWizard {
    style: DrawingStyle,
}

impl TerminalBlockWizard {
    /// Creates the wizard with the default drawing style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the wizard with a custom drawing style.
    #[must_use]
    pub const fn with_style(style: DrawingStyle) -> Self {
        Self { style }
    }

    /// Returns the drawing style.
    #[must_use]
    pub const fn style(&self) -> &DrawingStyle {
        &self.style
    }

    fn pad_count(params: &ParameterManager) -> WizardResult<usize> {
        let count = params.integer(PADS_PAGE, PAD_COUNT_KEY)?;
        usize::try_from(count).map_err(|_| {
            WizardError::invalid_value(PADS_PAGE, PAD_COUNT_KEY, format!("{count} is negative"))
        })
    }

    /// Builds the pad template: circular when width equals length, else oval.
    fn pad_template(params: &ParameterManager) -> WizardResult<Pad> {
        let width = params.length(PADS_PAGE, PAD_WIDTH_KEY)?;
        let length = params.length(PADS_PAGE, PAD_LENGTH_KEY)?;
        let drill = params.length(PADS_PAGE, PAD_DRILL_KEY)?;

        #[allow(clippy::float_cmp)] // shape follows exactly what the user typed
        let shape = if width == length {
            PadShape::Circle
        } else {
            PadShape::Oval
        };

        Ok(Pad::through_hole(width, length, drill, shape))
    }
}

impl FootprintWizard for TerminalBlockWizard {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    #[allow(clippy::cast_precision_loss)]
    fn generate_parameter_list(&self, params: &mut ParameterManager) {
        params
            .add_param(PADS_PAGE, PAD_COUNT_KEY, ParamUnit::Integer, 8_i64)
            .with_min(2.0)
            .with_max(MAX_PADS as f64)
            .with_multiple(2)
            .with_designator("n");
        params
            .add_param(PADS_PAGE, PAD_WIDTH_KEY, ParamUnit::Millimetres, 1.5)
            .with_max(MAX_LENGTH_MM)
            .with_hint("horizontal copper size");
        params
            .add_param(PADS_PAGE, PAD_LENGTH_KEY, ParamUnit::Millimetres, 3.0)
            .with_max(MAX_LENGTH_MM)
            .with_hint("vertical copper size");
        params
            .add_param(PADS_PAGE, PAD_PITCH_KEY, ParamUnit::Millimetres, 2.54)
            .with_max(MAX_LENGTH_MM)
            .with_designator("e");
        params
            .add_param(PADS_PAGE, ROW_SPACING_KEY, ParamUnit::Millimetres, 5.08)
            .with_max(MAX_LENGTH_MM);
        // Negative values shift the second row to the left
        params
            .add_param(PADS_PAGE, STAGGER_OFFSET_KEY, ParamUnit::Millimetres, 0.0)
            .with_min(-MAX_LENGTH_MM)
            .with_max(MAX_LENGTH_MM)
            .with_hint("X shift of the second row");
        params
            .add_param(PADS_PAGE, PAD_DRILL_KEY, ParamUnit::Millimetres, 0.9)
            .with_max(MAX_LENGTH_MM);
    }

    fn check_parameters(&self, params: &ParameterManager) -> Vec<String> {
        let mut errors = Vec::new();

        let positive = [
            PAD_WIDTH_KEY,
            PAD_LENGTH_KEY,
            PAD_PITCH_KEY,
            ROW_SPACING_KEY,
            PAD_DRILL_KEY,
        ];
        for key in positive {
            match params.length(PADS_PAGE, key) {
                Ok(v) if v <= 0.0 => errors.push(format!("{PADS_PAGE}/{key}: must be positive")),
                Ok(_) => {}
                Err(e) => errors.push(e.to_string()),
            }
        }

        if let (Ok(width), Ok(length), Ok(drill)) = (
            params.length(PADS_PAGE, PAD_WIDTH_KEY),
            params.length(PADS_PAGE, PAD_LENGTH_KEY),
            params.length(PADS_PAGE, PAD_DRILL_KEY),
        ) {
            if drill >= width.min(length) {
                errors.push(format!(
                    "{PADS_PAGE}/{PAD_DRILL_KEY}: {drill} must be smaller than the pad ({width} x {length})"
                ));
            }
        }

        errors
    }

    fn value(&self, params: &ParameterManager) -> WizardResult<String> {
        let pad_count = Self::pad_count(params)?;
        Ok(format!("{NAME}-{}", pad_count / LINE_COUNT))
    }

    fn build_footprint(
        &self,
        params: &ParameterManager,
        ctx: &mut DrawingContext,
    ) -> WizardResult<()> {
        let pad_count = Self::pad_count(params)?;
        let row_spacing = params.length(PADS_PAGE, ROW_SPACING_KEY)?;
        let pad_pitch = params.length(PADS_PAGE, PAD_PITCH_KEY)?;
        let stagger = params.length(PADS_PAGE, STAGGER_OFFSET_KEY)?;

        let value = self.value(params)?;
        let footprint = ctx.footprint_mut();
        footprint.description = value;
        footprint.attribute = FootprintAttribute::ThroughHole;

        // Pads
        StaggeredPadArray::new(
            Self::pad_template(params)?,
            pad_count,
            LINE_COUNT,
            row_spacing,
            pad_pitch,
        )?
        .with_stagger(stagger)
        .add_pads_to(ctx);

        let outline = BodyOutline::derive(
            pad_count,
            LINE_COUNT,
            row_spacing,
            pad_pitch,
            &self.style.courtyard,
        )?;
        debug!(
            width = outline.body.width,
            height = outline.body.height,
            courtyard_width = outline.courtyard.width,
            courtyard_height = outline.courtyard.height,
            "Derived terminal block outline"
        );

        // Housing and separators
        ctx.set_layer(Layer::FrontSilkscreen);
        ctx.set_line_width(self.style.silkscreen_line_width);
        let body = outline.body;
        ctx.draw_box(body.centre.x, body.centre.y, body.width, body.height);
        for (top, bottom) in outline.separator_lines() {
            ctx.line(top.x, top.y, bottom.x, bottom.y);
        }

        // Courtyard
        ctx.set_layer(Layer::FrontCourtyard);
        ctx.set_line_width(self.style.courtyard_line_width);
        let courtyard = outline.courtyard;
        ctx.draw_box(
            courtyard.centre.x,
            courtyard.centre.y,
            courtyard.width,
            courtyard.height,
        );

        // Texts
        let text_size = self.style.text_size;
        let text_offset = body.height / 2.0 + text_size;
        ctx.value(0.0, text_offset, text_size);
        ctx.reference(0.0, -text_offset, text_size);
        ctx.add_text(Text::new(
            TextKind::User,
            FAB_REFERENCE,
            Point::default(),
            text_size,
            Layer::FrontFab,
        ));

        Ok(())
    }
}
