//! `.kicad_mod` s-expression output.
//!
//! Renders a [`Footprint`] in the KiCad 7 footprint file syntax:
//!
//! ```text
//! (footprint "NAME"
//!   (version 20221018)
//!   (generator "footprint-wizards")
//!   (layer "F.Cu")
//!   (descr "...")
//!   (attr through_hole)
//!   (fp_text reference "REF**" (at x y) (layer "F.SilkS") (effects ...))
//!   (fp_line (start x y) (end x y) (stroke (width w) (type solid)) (layer "F.SilkS"))
//!   (pad "1" thru_hole oval (at x y) (size w h) (drill d) (layers "*.Cu" "*.Mask"))
//! )
//! ```
//!
//! Numbers are written with at most six decimals and no trailing zeros.

use crate::footprint::{Footprint, Line, Pad, Text};

/// File format version written into the `version` token.
pub const FORMAT_VERSION: u32 = 20_221_018;

/// Generator name written into the `generator` token.
pub const GENERATOR: &str = "footprint-wizards";

/// Renders `footprint` as `.kicad_mod` text.
#[must_use]
pub fn render(footprint: &Footprint) -> String {
    let mut out = String::new();

    out.push_str(&format!("(footprint \"{}\"\n", escape(&footprint.name)));
    out.push_str(&format!("  (version {FORMAT_VERSION})\n"));
    out.push_str(&format!("  (generator \"{GENERATOR}\")\n"));
    out.push_str("  (layer \"F.Cu\")\n");
    if !footprint.description.is_empty() {
        out.push_str(&format!("  (descr \"{}\")\n", escape(&footprint.description)));
    }
    out.push_str(&format!("  (attr {})\n", footprint.attribute.as_str()));

    push_text(&mut out, &footprint.reference);
    push_text(&mut out, &footprint.value);
    for text in &footprint.texts {
        push_text(&mut out, text);
    }
    for line in &footprint.lines {
        push_line(&mut out, line);
    }
    for pad in &footprint.pads {
        push_pad(&mut out, pad);
    }

    out.push_str(")\n");
    out
}

fn push_text(out: &mut String, text: &Text) {
    out.push_str(&format!(
        "  (fp_text {} \"{}\" (at {} {}) (layer \"{}\")\n",
        text.kind.as_str(),
        escape(&text.text),
        fmt_num(text.position.x),
        fmt_num(text.position.y),
        text.layer.as_str()
    ));
    out.push_str(&format!(
        "    (effects (font (size {size} {size}) (thickness {})))\n",
        fmt_num(text.thickness),
        size = fmt_num(text.size)
    ));
    out.push_str("  )\n");
}

fn push_line(out: &mut String, line: &Line) {
    out.push_str(&format!(
        "  (fp_line (start {} {}) (end {} {}) (stroke (width {}) (type solid)) (layer \"{}\"))\n",
        fmt_num(line.start.x),
        fmt_num(line.start.y),
        fmt_num(line.end.x),
        fmt_num(line.end.y),
        fmt_num(line.width),
        line.layer.as_str()
    ));
}

fn push_pad(out: &mut String, pad: &Pad) {
    let drill = pad
        .drill
        .map(|d| format!(" (drill {})", fmt_num(d)))
        .unwrap_or_default();
    let layers = pad
        .layers
        .iter()
        .map(|l| format!("\"{}\"", l.as_str()))
        .collect::<Vec<_>>()
        .join(" ");
    out.push_str(&format!(
        "  (pad \"{}\" {} {} (at {} {}) (size {} {}){} (layers {}))\n",
        escape(&pad.number),
        pad.kind.as_str(),
        pad.shape.as_str(),
        fmt_num(pad.position.x),
        fmt_num(pad.position.y),
        fmt_num(pad.size_x),
        fmt_num(pad.size_y),
        drill,
        layers
    ));
}

/// Formats a millimetre value with at most six decimals.
fn fmt_num(value: f64) -> String {
    let scaled = (value * 1e6).round();
    // Values this large have no fractional digits left to round
    let rounded = if scaled.is_finite() { scaled / 1e6 } else { value };
    // Avoid "-0"
    if rounded.abs() < 5e-7 {
        return "0".to_string();
    }
    format!("{rounded}")
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
