//! Hysteresis Event Segmenter
//!
//! Finds raw candidate saccade intervals by thresholding |velocity| with two
//! thresholds: a higher onset threshold and a lower offset threshold, which
//! avoids on/off flicker at a single borderline level. Segmentation is a
//! stateless scan: every onset sample is paired with the first offset sample
//! after it, so several onsets inside one physical event each produce their
//! own (possibly overlapping) candidate. Overlap resolution is the post
//! filter's job.

use super::events::CandidateInterval;

/// Hysteresis-based candidate segmenter
#[derive(Debug, Clone)]
pub struct EventSegmenter {
    /// Velocity magnitude above which a sample counts as an onset (deg/s)
    onset_velocity: f64,
    /// Velocity magnitude below which a sample counts as an offset (deg/s)
    offset_velocity: f64,
}

impl EventSegmenter {
    /// Create a segmenter with the given hysteresis thresholds
    pub fn new(onset_velocity: f64, offset_velocity: f64) -> Self {
        Self {
            onset_velocity,
            offset_velocity,
        }
    }

    /// Extract candidate intervals from a velocity signal.
    ///
    /// For each sample with `|velocity| > onset_velocity`, the candidate ends
    /// at the first later sample with `|velocity| < offset_velocity`. Onsets
    /// with no later offset produce no candidate. Candidates are returned in
    /// ascending start order.
    pub fn segment(&self, velocity: &[f64]) -> Vec<CandidateInterval> {
        let offsets: Vec<usize> = velocity
            .iter()
            .enumerate()
            .filter(|(_, v)| v.abs() < self.offset_velocity)
            .map(|(i, _)| i)
            .collect();

        let mut candidates = Vec::new();
        for (start, v) in velocity.iter().enumerate() {
            if v.abs() <= self.onset_velocity {
                continue;
            }
            let next = offsets.partition_point(|&e| e <= start);
            if let Some(&end) = offsets.get(next) {
                candidates.push(CandidateInterval::new(start, end));
            }
        }
        candidates
    }
}
