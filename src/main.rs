//! Merch AI - Main entry point
//!
//! Opens the marketing site or the research agent demo in the terminal, or
//! plays the research script headless.

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use merch::cli::{Cli, Commands};
use merch::{App, AppMode, DemoConfig, DemoSession};

const DEFAULT_LOG_FILE: &str = "merch.log";

fn env_filter() -> EnvFilter {
    // RUST_LOG overrides the default level
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize logging
///
/// The TUI owns the terminal, so interactive runs log to a file. Headless
/// runs log to stderr, keeping stdout for the transcript.
fn init_logger(cli: &Cli) -> Result<()> {
    if cli.is_headless() {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
        return Ok(());
    }

    let path = cli
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE));
    let file = File::create(&path).with_context(|| format!("Failed to create log file {:?}", path))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Load the configuration file (or defaults) and apply `--speed`
fn load_config(path: Option<&Path>, speed: f64) -> Result<DemoConfig> {
    let config = match path {
        Some(path) => {
            info!("Loading configuration file: {:?}", path);
            let config = DemoConfig::load_from_file(path)?;
            config.validate()?;
            config
        }
        None => DemoConfig::default(),
    };
    Ok(config.with_speed(speed)?)
}

/// Main application entry point
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logger(&cli)?;
    info!("Merch starting up");
    debug!("CLI arguments parsed");

    match cli.command {
        Some(Commands::Validate { ref config }) => {
            info!("Validating configuration file: {:?}", config);
            validate_config(config);
        }
        Some(Commands::Play { ref prompt }) => {
            let config = load_config(cli.config.as_deref(), cli.speed)?;
            run_headless(config, prompt.clone())?;
        }
        Some(Commands::Demo { ref prompt }) => {
            let config = load_config(cli.config.as_deref(), cli.speed)?;
            run_tui(App::new(config, AppMode::Demo, prompt.clone()))?;
        }
        Some(Commands::Site) | None => {
            let config = load_config(cli.config.as_deref(), cli.speed)?;
            run_tui(App::new(config, AppMode::Landing, None))?;
        }
    }

    Ok(())
}

fn validate_config(path: &Path) {
    match DemoConfig::load_from_file(path) {
        Ok(config) => match config.validate() {
            Ok(_) => {
                info!("Configuration validation successful");
                println!("✓ Configuration file is valid: {:?}", path);
            }
            Err(e) => {
                error!("Configuration validation failed: {}", e);
                eprintln!("✗ {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to load configuration file: {:#}", e);
            eprintln!("✗ Failed to load configuration file: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Play the script once and print the transcript to stdout
fn run_headless(config: DemoConfig, prompt: Option<String>) -> Result<()> {
    let prompt = prompt.unwrap_or_else(|| config.default_prompt.clone());
    let mut session = DemoSession::new(config);
    let mut out = stdout().lock();
    merch::play(&mut session, &prompt, &mut out)?;
    Ok(())
}

/// Run the interactive TUI
fn run_tui(mut app: App) -> Result<()> {
    debug!("Initializing terminal for TUI mode");

    // Initialize terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;

    // Create terminal backend
    let backend = CrosstermBackend::new(stdout());
    let result = match Terminal::new(backend) {
        Ok(mut terminal) => app.run(&mut terminal).map_err(anyhow::Error::from),
        Err(e) => Err(anyhow::Error::from(e).context("Failed to create terminal")),
    };

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    if let Err(ref e) = result {
        error!("Application error: {:#}", e);
    }
    result
}
