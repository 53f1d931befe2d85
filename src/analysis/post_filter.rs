//! Physiological Post Filter
//!
//! Validates raw candidate intervals against physiological constraints and
//! produces the final per-sample label array. Candidates are scanned in
//! ascending start order; each accepted event opens a refractory window that
//! subsequent candidates must clear. Because the refractory check runs
//! against the last *accepted* event, the overlapping candidates the
//! segmenter emits for a single physical saccade collapse to one accepted
//! event here.

use super::events::{
    CandidateInterval, LabeledEvents, RejectReason, RejectedInterval, SaccadeEvent,
};

/// Output of the post filter
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    /// Per-sample labels, same length as the velocity signal
    pub labels: LabeledEvents,
    /// Accepted events in start order, IDs 1..k
    pub events: Vec<SaccadeEvent>,
    /// Rejected candidates with reasons, in scan order
    pub rejected: Vec<RejectedInterval>,
}

/// Candidate validity filter
#[derive(Debug, Clone)]
pub struct PostFilter {
    /// Minimum saccade duration (seconds)
    min_saccade_duration_s: f64,
    /// Minimum gap between the end of an accepted event and the next start (seconds)
    min_intersaccadic_interval_s: f64,
    /// Physiological peak velocity cap (deg/s)
    max_velocity: f64,
}

impl PostFilter {
    /// Create a post filter with the given physiological constraints
    pub fn new(
        min_saccade_duration_s: f64,
        min_intersaccadic_interval_s: f64,
        max_velocity: f64,
    ) -> Self {
        Self {
            min_saccade_duration_s,
            min_intersaccadic_interval_s,
            max_velocity,
        }
    }

    /// Filter candidates and build the label array.
    ///
    /// Candidates must be in ascending start order with spans inside the
    /// velocity signal. Durations configured in seconds are converted to
    /// sample counts with `fps` at this boundary; all interval arithmetic is
    /// signed, so candidates overlapping the previous acceptance register as
    /// refractory violations.
    pub fn filter(
        &self,
        candidates: &[CandidateInterval],
        velocity: &[f64],
        fps: f64,
    ) -> FilterOutcome {
        let min_duration_samples = self.min_saccade_duration_s * fps;
        let min_gap_samples = self.min_intersaccadic_interval_s * fps;

        let mut labels: LabeledEvents = vec![0; velocity.len()];
        let mut events: Vec<SaccadeEvent> = Vec::new();
        let mut rejected: Vec<RejectedInterval> = Vec::new();
        let mut last_accepted_end: Option<usize> = None;

        for candidate in candidates {
            let peak_velocity = velocity[candidate.start..candidate.end]
                .iter()
                .fold(0.0f64, |peak, v| peak.max(v.abs()));

            if (candidate.duration() as f64) < min_duration_samples {
                rejected.push(RejectedInterval {
                    start: candidate.start,
                    end: candidate.end,
                    reason: RejectReason::InsufficientDuration,
                    peak_velocity,
                });
                continue;
            }

            if peak_velocity > self.max_velocity {
                rejected.push(RejectedInterval {
                    start: candidate.start,
                    end: candidate.end,
                    reason: RejectReason::ExcessivePeakVelocity,
                    peak_velocity,
                });
                continue;
            }

            if let Some(prev_end) = last_accepted_end {
                let gap = candidate.start as f64 - prev_end as f64;
                if gap < min_gap_samples {
                    rejected.push(RejectedInterval {
                        start: candidate.start,
                        end: candidate.end,
                        reason: RejectReason::InsufficientInterval,
                        peak_velocity,
                    });
                    continue;
                }
            }

            let id = events.len() as u32 + 1;
            for label in &mut labels[candidate.start..candidate.end] {
                *label = id;
            }
            events.push(SaccadeEvent {
                id,
                start: candidate.start,
                end: candidate.end,
                peak_velocity,
                duration_s: candidate.duration() as f64 / fps,
            });
            last_accepted_end = Some(candidate.end);
        }

        FilterOutcome {
            labels,
            events,
            rejected,
        }
    }
}
