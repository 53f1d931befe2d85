//! Saccade Detector - Gaze Event Extraction
//!
//! Analyzes video-derived eye position traces into labeled saccade/fixation events.

use saccade_detector::app::cli::{Cli, Commands, ConfigAction};
use saccade_detector::app::config::Config;
use saccade_detector::detector::{GazeTrace, SaccadeDetector};
use saccade_detector::export::{write_event_csv, AnalysisReport};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments first so we can use --verbose to set log level
    let cli = Cli::parse_args();

    // Initialize tracing (--verbose enables debug-level output)
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Load config
    let config = if let Some(path) = &cli.config {
        Config::load(path)?
    } else {
        Config::load_default()?
    };

    // Execute command
    match cli.command {
        Commands::Analyze {
            input,
            output_csv,
            output_json,
            fps,
        } => {
            run_analyze(&input, output_csv, output_json, fps, config)?;
        }
        Commands::Inspect { trace } => {
            run_inspect(&trace)?;
        }
        Commands::Init { force } => {
            run_init(force, &config)?;
        }
        Commands::Config { action } => {
            run_config(action, &config)?;
        }
    }

    Ok(())
}

fn run_analyze(
    input: &std::path::Path,
    output_csv: Option<std::path::PathBuf>,
    output_json: Option<std::path::PathBuf>,
    fps_override: Option<f64>,
    config: Config,
) -> anyhow::Result<()> {
    info!("Analyzing trace {:?}", input);

    if !input.exists() {
        anyhow::bail!("Trace file not found: {:?}", input);
    }

    let mut trace = GazeTrace::load(input)?;
    if let Some(fps) = fps_override {
        trace.fps = fps;
    }

    info!(
        "Loaded trace '{}' with {} samples at {} fps",
        trace.metadata.name,
        trace.len(),
        trace.fps
    );

    let detector = SaccadeDetector::new(config)?;
    let detection = detector.detect_trace(&trace)?;

    // Print summary
    println!("\nAnalysis Complete!");
    println!("  Trace: {}", trace.metadata.name);
    println!("  Samples: {}", detection.labels.len());
    println!("  Saccades: {}", detection.saccade_count());
    println!("  Rejected candidates: {}", detection.rejected.len());
    if !detection.denoise_converged {
        println!(
            "  Note: denoiser hit its iteration cap ({} iterations)",
            detection.denoise_iterations
        );
    }

    for event in &detection.events {
        println!(
            "    #{}: frames {}..{} ({:.0} ms, peak {:.1} deg/s)",
            event.id,
            event.start,
            event.end,
            event.duration_s * 1000.0,
            event.peak_velocity
        );
    }

    if let Some(path) = output_csv {
        write_event_csv(&path, &detection.labels)?;
        info!("Wrote event log to {:?}", path);
    }

    if let Some(path) = output_json {
        let report = AnalysisReport::new(&trace, &detection);
        report.save(&path)?;
        info!("Wrote analysis report to {:?}", path);
    }

    Ok(())
}

fn run_inspect(path: &std::path::Path) -> anyhow::Result<()> {
    if !path.exists() {
        anyhow::bail!("Trace file not found: {:?}", path);
    }

    let trace = GazeTrace::load(path)?;

    println!("Trace: {}", trace.metadata.name);
    println!("  ID: {}", trace.metadata.id);
    if let Some(source) = &trace.metadata.source {
        println!("  Source: {}", source);
    }
    println!("  Created: {}", trace.metadata.created_at);
    println!("  Samples: {}", trace.len());
    println!("  Sampling rate: {} fps", trace.fps);
    println!("  Duration: {:.2} s", trace.duration_s());

    Ok(())
}

fn run_init(force: bool, config: &Config) -> anyhow::Result<()> {
    let config_path = Config::default_path();

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {:?}. Use --force to overwrite.",
            config_path
        );
    }

    config.save_default()?;
    println!("Created config at {:?}", config_path);
    println!("\nConfig content:\n{}", config.to_toml()?);

    Ok(())
}

fn run_config(action: ConfigAction, config: &Config) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            let toml_str = config.to_toml()?;
            println!("Configuration ({:?}):\n", Config::default_path());
            println!("{}", toml_str);
        }
        ConfigAction::Reset { force } => {
            let config_path = Config::default_path();

            if config_path.exists() && !force {
                println!("Config exists at {:?}", config_path);
                println!("Use --force to reset to defaults");
                return Ok(());
            }

            let default_config = Config::default();
            default_config.save_default()?;
            println!("Configuration reset to defaults at {:?}", config_path);
        }
    }

    Ok(())
}
