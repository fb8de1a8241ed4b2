//! Pad-array and outline geometry.
//!
//! Everything here is pure coordinate computation in millimetres:
//!
//! - [`pad_array`] places pads in staggered rows (zig-zag numbering)
//! - [`outline`] derives the body outline, courtyard and separator lines
//!
//! Both take the same pad count / line count inputs and reject arrangements
//! that cannot be split evenly into lines.

pub mod outline;
pub mod pad_array;

pub use outline::{snap_up, BodyOutline, CourtyardRules, Rect};
pub use pad_array::{PadPlacement, StaggeredPadArray};

use crate::error::{WizardError, WizardResult};

/// Largest pad count a single arrangement may hold.
pub const MAX_PAD_COUNT: usize = 1000;

/// Returns the number of pads per line (columns) for a pad arrangement.
///
/// # Errors
///
/// Returns [`WizardError::InvalidLayout`] if either count is zero, the pad
/// count exceeds [`MAX_PAD_COUNT`], or the pad count is not a multiple of the
/// line count.
pub fn columns(pad_count: usize, line_count: usize) -> WizardResult<usize> {
    if line_count == 0 {
        return Err(WizardError::invalid_layout("line count must be at least 1"));
    }
    if pad_count == 0 {
        return Err(WizardError::invalid_layout("pad count must be at least 1"));
    }
    if pad_count > MAX_PAD_COUNT {
        return Err(WizardError::invalid_layout(format!(
            "pad count {pad_count} exceeds the maximum {MAX_PAD_COUNT}"
        )));
    }
    if pad_count % line_count != 0 {
        return Err(WizardError::invalid_layout(format!(
            "pad count {pad_count} is not a multiple of line count {line_count}"
        )));
    }
    Ok(pad_count / line_count)
}
