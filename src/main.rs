//! footprint-wizards: build parametric PCB footprints from the command line.
//!
//! Footprints are printed to stdout; logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use footprint_wizards::config::{self, Config, OutputFormat};
use footprint_wizards::footprint::kicad;
use footprint_wizards::wizard::{
    build as build_footprint, DrawingStyle, ParameterOverride, WizardRegistry,
};

/// Parametric PCB footprint wizards.
///
/// Builds footprints for staggered two-row terminal blocks and prints them
/// as KiCad footprint text or JSON.
#[derive(Parser, Debug)]
#[command(name = "footprint-wizards")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List available wizards
    List,

    /// Show a wizard's parameters and defaults
    Params {
        /// Wizard name
        wizard: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a footprint and print it
    Build {
        /// Wizard name
        wizard: String,

        /// Override a parameter: [PAGE:]NAME=VALUE (repeatable)
        #[arg(short, long = "set", value_name = "ASSIGNMENT")]
        set: Vec<ParameterOverride>,

        /// Output format: kicad or json
        #[arg(short, long)]
        format: Option<String>,
    },
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN, // Default to warn for unknown levels
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn list(registry: &WizardRegistry) {
    for wizard in registry.iter() {
        println!("{:<16} {}", wizard.name(), wizard.description());
    }
}

fn params(registry: &WizardRegistry, name: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let wizard = registry.get(name)?;
    let params = wizard.parameters();

    if json {
        println!("{}", serde_json::to_string_pretty(&params)?);
        return Ok(());
    }

    println!("{}: {}", wizard.name(), wizard.description());
    for page in params.pages() {
        println!("[{page}]");
        for param in params.page(page) {
            println!("  {param}");
        }
    }
    Ok(())
}

fn build(
    registry: &WizardRegistry,
    cfg: &Config,
    name: &str,
    set: &[ParameterOverride],
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = match format {
        Some(f) => OutputFormat::from_str_loose(f)
            .ok_or_else(|| format!("unknown output format '{f}' (expected kicad or json)"))?,
        None => cfg.output.format,
    };

    let wizard = registry.get(name)?;
    let mut params = wizard.parameters();

    if let Some(overrides) = cfg.overrides_for(wizard.name()) {
        params.apply_json(overrides)?;
    }
    for assignment in set {
        params.apply(assignment)?;
    }

    let footprint = build_footprint(wizard, &params)?;
    info!(
        name = %footprint.name,
        pads = footprint.pads.len(),
        "Footprint ready"
    );

    match format {
        OutputFormat::Kicad => print!("{}", kicad::render(&footprint)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&footprint)?),
    }
    Ok(())
}

/// Entry point for the footprint-wizards CLI.
fn main() -> ExitCode {
    let args = Args::parse();

    // Load configuration
    let config_path = args.config.as_deref();
    let cfg = match config::load_config(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            if config_path.is_none() {
                if let Some(default_path) = config::default_config_path() {
                    eprintln!("\nDefault config location: {}", default_path.display());
                }
            }
            return ExitCode::FAILURE;
        }
    };

    // Initialise logging
    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    let registry = WizardRegistry::with_builtin(DrawingStyle::from(&cfg.style));

    let result = match &args.command {
        Command::List => {
            list(&registry);
            Ok(())
        }
        Command::Params { wizard, json } => params(&registry, wizard, *json),
        Command::Build {
            wizard,
            set,
            format,
        } => build(&registry, &cfg, wizard, set, format.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn parse_build_with_overrides() {
        let args = Args::try_parse_from([
            "footprint-wizards",
            "build",
            "KF141R-2.54",
            "--set",
            "pad count=10",
            "-s",
            "Pads:stagger_offset=1.27",
            "--format",
            "json",
        ])
        .unwrap();
        let Command::Build { wizard, set, format } = args.command else {
            panic!("expected build command");
        };
        assert_eq!(wizard, "KF141R-2.54");
        assert_eq!(set.len(), 2);
        assert_eq!(set[1].page.as_deref(), Some("Pads"));
        assert_eq!(format.as_deref(), Some("json"));
    }

    #[test]
    fn log_level_selection() {
        assert_eq!(get_log_level(0, true, "trace"), Level::ERROR);
        assert_eq!(get_log_level(0, false, "debug"), Level::DEBUG);
        assert_eq!(get_log_level(0, false, "bogus"), Level::WARN);
        assert_eq!(get_log_level(2, false, "warn"), Level::DEBUG);
        assert_eq!(get_log_level(5, false, "warn"), Level::TRACE);
    }
}
