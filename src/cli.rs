use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Merch AI - terminal marketing site and research agent demo
#[derive(Parser)]
#[command(name = "merch")]
#[command(about = "Merch AI marketing site and scripted research-agent demo in your terminal")]
#[command(version)]
pub struct Cli {
    /// Path to a demo configuration file (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Playback speed multiplier; 2.0 runs the script twice as fast
    #[arg(long, global = true, default_value_t = 1.0)]
    pub speed: f64,

    /// Log file used while the TUI owns the terminal.
    ///
    /// Defaults to `merch.log` in the system temp directory. Headless
    /// commands log to stderr instead.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the marketing site (default)
    Site,
    /// Open the research agent demo
    Demo {
        /// Text the prompt line starts with
        #[arg(short, long)]
        prompt: Option<String>,
    },
    /// Run the research script once without the TUI and print the transcript
    Play {
        /// Prompt to submit (defaults to the configured prompt)
        #[arg(short, long)]
        prompt: Option<String>,
    },
    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        config: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }

    /// Whether this invocation runs without taking over the terminal
    pub fn is_headless(&self) -> bool {
        matches!(
            self.command,
            Some(Commands::Play { .. }) | Some(Commands::Validate { .. })
        )
    }
}
