//! Detection Workflow
//!
//! Orchestrates the complete analysis pipeline from raw position signal to
//! labeled gaze events, and defines the gaze trace persistence format.

pub mod trace;

pub use trace::{GazeTrace, TraceMetadata};

use crate::analysis::{
    Denoiser, EventSegmenter, LabeledEvents, PostFilter, RejectedInterval, SaccadeEvent,
    VelocityEstimator,
};
use crate::app::config::Config;
use tracing::{debug, info};

/// Complete result of analyzing one position signal
#[derive(Debug, Clone)]
pub struct Detection {
    /// Denoised position signal (pixels)
    pub denoised: Vec<f64>,
    /// Angular velocity signal (deg/s)
    pub velocity: Vec<f64>,
    /// Per-sample event labels; 0 = fixation, positive = saccade ID
    pub labels: LabeledEvents,
    /// Accepted saccade events in start order
    pub events: Vec<SaccadeEvent>,
    /// Rejected candidates with reasons
    pub rejected: Vec<RejectedInterval>,
    /// IRLS iterations the denoiser executed
    pub denoise_iterations: usize,
    /// Whether the denoiser converged before its iteration cap
    pub denoise_converged: bool,
}

impl Detection {
    /// Number of accepted saccades
    pub fn saccade_count(&self) -> usize {
        self.events.len()
    }

    /// Whether the sample at `index` belongs to an accepted saccade
    pub fn is_saccade(&self, index: usize) -> bool {
        self.labels.get(index).is_some_and(|&label| label > 0)
    }
}

/// Saccade detector orchestrating the full analysis pipeline
pub struct SaccadeDetector {
    config: Config,
}

impl SaccadeDetector {
    /// Create a detector, validating the configuration up front.
    ///
    /// Fails fast with a configuration error so that invalid thresholds
    /// never silently corrupt a whole analysis run.
    pub fn new(config: Config) -> crate::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the full pipeline over a position signal sampled at `fps`.
    ///
    /// The position signal is in pixels, one sample per analyzed frame in
    /// index order. The whole signal is processed in one synchronous batch;
    /// no state survives between calls.
    pub fn detect(&self, position: &[f64], fps: f64) -> crate::Result<Detection> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(crate::Error::Config(format!(
                "fps must be positive and finite, got {fps}"
            )));
        }

        debug!(samples = position.len(), fps, "starting saccade detection");
        if let (Some(min), Some(max)) = (signal_min(position), signal_max(position)) {
            debug!(min, max, "position signal range");
        }

        let denoiser = Denoiser::new(
            self.config.denoise.alpha,
            self.config.denoise.beta,
            self.config.denoise.max_iterations,
            self.config.denoise.convergence_tolerance,
        );
        let denoise = denoiser.denoise(position);
        debug!(
            iterations = denoise.iterations,
            converged = denoise.converged,
            "denoising finished"
        );

        let estimator = VelocityEstimator::new(self.config.velocity.pixels_per_degree);
        let velocity = estimator.velocity(&denoise.samples, fps);

        let segmenter = EventSegmenter::new(
            self.config.segmentation.onset_velocity,
            self.config.segmentation.offset_velocity,
        );
        let candidates = segmenter.segment(&velocity);
        info!(
            candidates = candidates.len(),
            "segmentation produced candidate intervals"
        );

        let post_filter = PostFilter::new(
            self.config.post_filter.min_saccade_duration_s,
            self.config.post_filter.min_intersaccadic_interval_s,
            self.config.post_filter.max_velocity,
        );
        let outcome = post_filter.filter(&candidates, &velocity, fps);
        info!(
            accepted = outcome.events.len(),
            rejected = outcome.rejected.len(),
            "post filtering complete"
        );
        for rejection in &outcome.rejected {
            debug!(
                start = rejection.start,
                end = rejection.end,
                reason = %rejection.reason,
                peak_velocity = rejection.peak_velocity,
                "candidate rejected"
            );
        }

        Ok(Detection {
            denoised: denoise.samples,
            velocity,
            labels: outcome.labels,
            events: outcome.events,
            rejected: outcome.rejected,
            denoise_iterations: denoise.iterations,
            denoise_converged: denoise.converged,
        })
    }

    /// Convenience wrapper analyzing a loaded gaze trace
    pub fn detect_trace(&self, trace: &GazeTrace) -> crate::Result<Detection> {
        self.detect(&trace.positions, trace.fps)
    }
}

fn signal_min(signal: &[f64]) -> Option<f64> {
    signal.iter().copied().reduce(f64::min)
}

fn signal_max(signal: &[f64]) -> Option<f64> {
    signal.iter().copied().reduce(f64::max)
}
