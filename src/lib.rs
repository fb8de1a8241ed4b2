//! footprint-wizards: parametric PCB footprints for staggered terminal blocks
//!
//! This library computes pad arrays, outlines and courtyards for two-row
//! terminal block connectors and emits them as footprints.
//!
//! # Architecture
//!
//! - **Layout**: pure geometry (staggered pad positions, outline/courtyard)
//! - **Wizards**: declare parameters and draw through a [`wizard::DrawingContext`]
//! - **Footprint model**: pads, lines and texts, with `.kicad_mod` output
//!
//! # Example
//!
//! ```
//! use footprint_wizards::wizard::{build, FootprintWizard, TerminalBlockWizard};
//!
//! let wizard = TerminalBlockWizard::new();
//! let mut params = wizard.parameters();
//! params.set("Pads", "pad count", "10").unwrap();
//!
//! let footprint = build(&wizard, &params).unwrap();
//! assert_eq!(footprint.name, "KF141R-2.54-5");
//! assert_eq!(footprint.pads.len(), 10);
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading and validation
//! - [`error`]: Error types
//! - [`footprint`]: Footprint model and KiCad output
//! - [`layout`]: Pad-array and outline geometry
//! - [`wizard`]: Wizard trait, parameters, drawing context, registry

pub mod config;
pub mod error;
pub mod footprint;
pub mod layout;
pub mod wizard;
