//! # Saccade Detector
//!
//! A batch analysis engine that extracts discrete gaze events (saccades vs.
//! fixations) from a noisy one-dimensional eye-position time series derived
//! from video.
//!
//! ## Overview
//!
//! The input is an ordered position signal in pixels, one sample per analyzed
//! video frame, together with the capture rate. The engine denoises the
//! signal while preserving saccadic jumps, converts it to angular velocity,
//! finds candidate event intervals by hysteresis thresholding, and rejects
//! physiologically implausible candidates. The output is a per-sample label
//! array plus structured diagnostics for every rejected interval.
//!
//! ## Quick Start
//!
//! ```
//! use saccade_detector::{Config, SaccadeDetector};
//!
//! let config = Config::default();
//! let detector = SaccadeDetector::new(config).expect("default config is valid");
//!
//! let position = vec![0.0, 0.0, 0.0, 50.0, 50.0, 50.0, 0.0, 0.0, 0.0];
//! let detection = detector.detect(&position, 30.0).expect("valid input");
//!
//! assert_eq!(detection.labels.len(), position.len());
//! ```
//!
//! ## Architecture
//!
//! The system is organized into the following modules:
//!
//! - [`analysis`]: The four-stage detection core (denoise, velocity,
//!   segmentation, post filtering)
//! - [`detector`]: High-level orchestration and gaze trace persistence
//! - [`export`]: Event log and analysis report writers for downstream tools
//! - [`app`]: CLI and configuration management
//!
//! ## Detection Pipeline
//!
//! ```text
//! ┌──────────────┐    ┌───────────────┐    ┌──────────────┐    ┌──────────────┐
//! │   Denoiser   │───▶│   Velocity    │───▶│    Event     │───▶│     Post     │
//! │    (IRLS)    │    │   Estimator   │    │  Segmenter   │    │    Filter    │
//! └──────────────┘    └───────────────┘    └──────────────┘    └──────────────┘
//!    pixels              deg/second          candidate            labels +
//!                                            intervals            rejections
//! ```
//!
//! Upstream concerns (video decoding, face landmarks, pupil localization) and
//! downstream rendering are out of scope; the engine consumes a prepared
//! position signal and produces data for exporters and overlay renderers.

pub mod analysis;
pub mod app;
pub mod detector;
pub mod export;

// Re-export commonly used types
pub use analysis::{
    CandidateInterval, DenoiseResult, Denoiser, EventSegmenter, FilterOutcome, LabeledEvents,
    PostFilter, RejectReason, RejectedInterval, SaccadeEvent, VelocityEstimator,
};
pub use app::config::Config;
pub use detector::{Detection, GazeTrace, SaccadeDetector};

/// Result type alias for the saccade detector
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the saccade detector
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Trace error: {0}")]
    Trace(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
