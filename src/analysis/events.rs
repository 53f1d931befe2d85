//! Gaze event types shared across the analysis stages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-sample event labels.
///
/// Same length as the analyzed position signal. `0` marks fixation or
/// background; positive values are accepted-saccade IDs assigned in
/// increasing order of first occurrence.
pub type LabeledEvents = Vec<u32>;

/// A raw candidate event interval produced by the segmenter.
///
/// `start` is inclusive, `end` exclusive, with `start < end`. Candidates may
/// overlap; resolution is deferred to the post filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateInterval {
    /// First sample of the candidate
    pub start: usize,
    /// One past the last sample of the candidate
    pub end: usize,
}

impl CandidateInterval {
    /// Create a candidate interval
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "candidate interval must be non-empty");
        Self { start, end }
    }

    /// Duration in samples
    pub fn duration(&self) -> usize {
        self.end - self.start
    }
}

/// Why the post filter rejected a candidate interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectReason {
    /// Candidate shorter than the minimum saccade duration
    InsufficientDuration,
    /// Peak velocity above the physiological plausibility cap
    ExcessivePeakVelocity,
    /// Candidate starts inside the refractory window of the last accepted event
    InsufficientInterval,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            RejectReason::InsufficientDuration => "insufficient-duration",
            RejectReason::ExcessivePeakVelocity => "excessive-peak-velocity",
            RejectReason::InsufficientInterval => "insufficient-interval",
        };
        f.write_str(tag)
    }
}

/// Diagnostic record for a rejected candidate interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RejectedInterval {
    /// First sample of the rejected candidate
    pub start: usize,
    /// One past the last sample of the rejected candidate
    pub end: usize,
    /// Rejection reason
    pub reason: RejectReason,
    /// Peak |velocity| over the candidate span (deg/s)
    pub peak_velocity: f64,
}

/// An accepted saccade event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaccadeEvent {
    /// Sequential event ID, starting at 1
    pub id: u32,
    /// First sample of the event
    pub start: usize,
    /// One past the last sample of the event
    pub end: usize,
    /// Peak |velocity| over the event span (deg/s)
    pub peak_velocity: f64,
    /// Event duration in seconds
    pub duration_s: f64,
}

impl SaccadeEvent {
    /// Event duration in samples
    pub fn duration_samples(&self) -> usize {
        self.end - self.start
    }
}
