//! Command-Line Interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Saccade Detector - Extract gaze events from eye position traces
#[derive(Parser, Debug)]
#[command(name = "saccade-detect")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a gaze trace and emit labeled events
    Analyze {
        /// Input trace file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the per-frame event log (CSV)
        #[arg(long)]
        output_csv: Option<PathBuf>,

        /// Output path for the analysis report (JSON)
        #[arg(long)]
        output_json: Option<PathBuf>,

        /// Override the sampling rate stored in the trace (frames/second)
        #[arg(long)]
        fps: Option<f64>,
    },

    /// Print summary information about a gaze trace
    Inspect {
        /// Trace file to inspect
        trace: PathBuf,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// View or reset configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
