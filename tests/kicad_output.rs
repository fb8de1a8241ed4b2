//! Integration tests for `.kicad_mod` rendering of wizard output.

use footprint_wizards::footprint::kicad;
use footprint_wizards::wizard::{build, FootprintWizard, TerminalBlockWizard};

fn render_default() -> String {
    let wizard = TerminalBlockWizard::new();
    let footprint = build(&wizard, &wizard.parameters()).expect("default build");
    kicad::render(&footprint)
}

#[test]
fn test_header_fields() {
    let text = render_default();
    assert!(text.starts_with("(footprint \"KF141R-2.54-4\"\n"));
    assert!(text.contains("(generator \"footprint-wizards\")"));
    assert!(text.contains("(descr \"KF141R-2.54-4\")"));
    assert!(text.contains("(attr through_hole)"));
}

#[test]
fn test_every_pad_rendered() {
    let text = render_default();
    assert_eq!(text.matches("(pad ").count(), 8);
    assert_eq!(text.matches("(pad \"1\" thru_hole oval").count(), 2);
    assert!(text.contains("(at -3.81 -2.54) (size 1.5 3) (drill 0.9)"));
    assert!(text.contains("(at 3.81 2.54) (size 1.5 3) (drill 0.9)"));
}

#[test]
fn test_texts_rendered() {
    let text = render_default();
    assert!(text.contains("(fp_text reference \"REF**\" (at 0 -7.8) (layer \"F.SilkS\")"));
    assert!(text.contains("(fp_text value \"KF141R-2.54-4\" (at 0 7.8) (layer \"F.Fab\")"));
    assert!(text.contains("(fp_text user \"${REFERENCE}\" (at 0 0) (layer \"F.Fab\")"));
}

#[test]
fn test_layers_and_widths() {
    let text = render_default();
    let silk = text
        .lines()
        .filter(|l| l.contains("fp_line") && l.contains("\"F.SilkS\""))
        .count();
    let court = text
        .lines()
        .filter(|l| l.contains("fp_line") && l.contains("\"F.CrtYd\""))
        .count();
    assert_eq!(silk, 8);
    assert_eq!(court, 4);
    assert!(text.contains("(stroke (width 0.12) (type solid)) (layer \"F.SilkS\")"));
    assert!(text.contains("(stroke (width 0.05) (type solid)) (layer \"F.CrtYd\")"));
}

#[test]
fn test_parentheses_balanced() {
    let text = render_default();
    let mut depth = 0_i32;
    let mut in_string = false;
    let mut escaped = false;
    for c in text.chars() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        assert!(depth >= 0);
    }
    assert_eq!(depth, 0);
}
