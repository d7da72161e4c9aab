//! StepDialog CLI Entry Point
//!
//! Runs the step configuration dialog against a workflow directory,
//! standing in for the host framework: existing step identifiers are
//! supplied on the command line, and the accepted configuration is
//! printed (or written) as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Configure a new step
//! stepdialog /workflows/demo
//!
//! # With existing steps in the workflow
//! stepdialog /workflows/demo --taken align --taken qc_report
//!
//! # Re-edit a previously saved configuration
//! stepdialog /workflows/demo --config step.json --output step.json
//! ```

use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use log::{info, warn};

use stepdialog::dialog::ConfigureDialog;
use stepdialog::host::WorkflowIndex;
use stepdialog::ui::terminal::render_field;
use stepdialog::ui::TerminalPrompt;
use stepdialog::StepConfig;
use stepdialog::{APP_NAME, VERSION};

/// Command-line configuration parsed from arguments.
#[derive(Debug, Default)]
struct CliConfig {
    workflow_dir: Option<PathBuf>,
    taken_identifiers: Vec<String>,
    config_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    verbose: bool,
}

/// Configures the logging system with appropriate formatting.
fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            use std::io::Write;

            match record.level() {
                log::Level::Warn | log::Level::Error => {
                    writeln!(buf, "[{}] {}", record.level(), record.args())
                }
                _ => writeln!(buf, "{}", record.args()),
            }
        })
        .init();
}

/// Prints the application banner with version information.
fn print_banner() {
    println!();
    println!("{} v{}", APP_NAME, VERSION);
    println!("Step Configuration Dialog");
    println!();
}

/// Prints usage information.
fn print_usage() {
    println!("Usage: stepdialog [OPTIONS] <WORKFLOW_DIR>");
    println!();
    println!("Arguments:");
    println!("  <WORKFLOW_DIR>      Workflow root directory locations resolve against");
    println!();
    println!("Options:");
    println!("  --taken ID          Identifier already used by another step (repeatable)");
    println!("  --config PATH       Preload a previously saved step configuration (JSON)");
    println!("  --output PATH       Write the accepted configuration to PATH");
    println!("  --verbose           Enable debug logging");
    println!("  --help              Show this help message");
    println!("  --version           Show version information");
    println!();
    println!("Examples:");
    println!("  stepdialog /workflows/demo");
    println!("  stepdialog /workflows/demo --taken align --taken qc_report");
    println!("  stepdialog /workflows/demo --config step.json --output step.json");
}

/// Parses command-line arguments into a CliConfig struct.
fn parse_arguments(args: &[String]) -> Result<CliConfig, String> {
    let mut config = CliConfig::default();
    let mut i = 1; // Skip program name

    while i < args.len() {
        let arg = &args[i];

        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            "--version" | "-V" => {
                println!("{} {}", APP_NAME, VERSION);
                std::process::exit(0);
            }
            "--verbose" | "-v" => {
                config.verbose = true;
            }
            "--taken" => {
                i += 1;
                if i >= args.len() {
                    return Err("--taken requires an identifier argument".to_string());
                }
                config.taken_identifiers.push(args[i].clone());
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    return Err("--config requires a path argument".to_string());
                }
                config.config_path = Some(PathBuf::from(&args[i]));
            }
            "--output" => {
                i += 1;
                if i >= args.len() {
                    return Err("--output requires a path argument".to_string());
                }
                config.output_path = Some(PathBuf::from(&args[i]));
            }
            arg if arg.starts_with('-') => {
                return Err(format!("Unknown option: {}", arg));
            }
            _ => {
                if config.workflow_dir.is_some() {
                    return Err(format!("Unexpected argument: {}", arg));
                }
                config.workflow_dir = Some(PathBuf::from(arg));
            }
        }
        i += 1;
    }

    Ok(config)
}

/// Validates the workflow root directory.
fn check_workflow_dir(dir: &Path) -> Result<(), Box<dyn Error>> {
    if !dir.exists() {
        return Err(format!("Workflow directory does not exist: {}", dir.display()).into());
    }

    if !dir.is_dir() {
        return Err(format!("Path is not a directory: {}", dir.display()).into());
    }

    Ok(())
}

/// Drives the dialog's interactive edit loop.
///
/// Returns the accepted configuration, or `None` if the user cancelled.
fn edit_loop(
    dialog: &mut ConfigureDialog,
    prompt: &mut TerminalPrompt,
) -> Result<Option<StepConfig>, Box<dyn Error>> {
    let theme = ColorfulTheme::default();

    loop {
        let items = vec![
            render_field("Identifier", dialog.identifier(), dialog.identifier_status()),
            render_field("Location  ", dialog.location(), dialog.location_status()),
            "Browse for location...".to_string(),
            "OK".to_string(),
            "Cancel".to_string(),
        ];

        let choice = Select::with_theme(&theme)
            .with_prompt("Configure Step")
            .items(&items)
            .default(3)
            .interact()?;

        match choice {
            0 => {
                let text: String = Input::with_theme(&theme)
                    .with_prompt("Identifier")
                    .with_initial_text(dialog.identifier())
                    .allow_empty(true)
                    .interact_text()?;
                dialog.change_identifier(text)?;
            }
            1 => {
                let text: String = Input::with_theme(&theme)
                    .with_prompt("Location")
                    .with_initial_text(dialog.location())
                    .allow_empty(true)
                    .interact_text()?;
                dialog.change_location(text)?;
            }
            2 => {
                if !dialog.browse_location(prompt)? {
                    info!("Directory selection cancelled");
                }
            }
            3 => {
                if dialog.accept(prompt)? {
                    return Ok(Some(dialog.config()));
                }
            }
            _ => {
                dialog.reject();
                return Ok(None);
            }
        }
    }
}

/// Main application entry point.
fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    // Parse arguments
    let cli = parse_arguments(&args).map_err(|e| {
        eprintln!("Error: {}", e);
        eprintln!();
        print_usage();
        e
    })?;

    // Setup logging
    setup_logging(cli.verbose);

    // Print banner
    print_banner();

    let Some(workflow_dir) = cli.workflow_dir else {
        print_usage();
        return Err("Missing required <WORKFLOW_DIR> argument".into());
    };
    check_workflow_dir(&workflow_dir)?;
    info!("Workflow root: {}", workflow_dir.display());

    if !cli.taken_identifiers.is_empty() {
        info!(
            "Existing step identifiers: {}",
            cli.taken_identifiers.join(", ")
        );
    }

    // Wire up the dialog the way the host framework would
    let mut dialog = ConfigureDialog::new();
    dialog.set_workflow_location(&workflow_dir);
    dialog.set_identifier_occurrence(Box::new(WorkflowIndex::from_identifiers(
        cli.taken_identifiers,
    )));

    // Preload a saved configuration, if any
    if let Some(ref path) = cli.config_path {
        let json = fs::read_to_string(path)
            .map_err(|e| format!("Could not read config from '{}': {}", path.display(), e))?;
        let saved = StepConfig::from_json(&json)?;
        info!("Loaded configuration for step '{}'", saved.identifier);
        dialog.set_config(&saved);
    }

    // Show initial validity before the first edit
    dialog.validate()?;

    let mut prompt = TerminalPrompt::new();
    let Some(accepted) = edit_loop(&mut dialog, &mut prompt)? else {
        warn!("Configuration cancelled");
        return Ok(());
    };

    let json = accepted.to_json()?;
    println!();
    println!("{}", json);

    if let Some(ref path) = cli.output_path {
        fs::write(path, format!("{}\n", json))
            .map_err(|e| format!("Could not write '{}': {}", path.display(), e))?;
        info!("Configuration written to {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!();
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
