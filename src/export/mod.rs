//! Export Module
//!
//! Writers for the artifacts downstream tools consume: a per-frame gaze
//! event log in CSV form (used by spreadsheet review and overlay renderers)
//! and a structured JSON analysis report (used by logging and reporting).
//! The analysis core itself never writes files; everything here operates on
//! finished [`Detection`] values.

use crate::analysis::{RejectedInterval, SaccadeEvent};
use crate::detector::{Detection, GazeTrace};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// Human-readable event class for a per-sample label
pub fn event_label(label: u32) -> &'static str {
    if label > 0 {
        "saccade"
    } else {
        "fixation"
    }
}

/// Render the per-frame event log as CSV text (`frame,gaze_event` rows)
pub fn event_csv(labels: &[u32]) -> String {
    let mut out = String::from("frame,gaze_event\n");
    for (frame, &label) in labels.iter().enumerate() {
        out.push_str(&format!("{},{}\n", frame, event_label(label)));
    }
    out
}

/// Write the per-frame event log to a CSV file
pub fn write_event_csv(path: &Path, labels: &[u32]) -> crate::Result<()> {
    std::fs::write(path, event_csv(labels))?;
    Ok(())
}

/// Structured summary of one analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Name of the analyzed trace
    pub trace_name: String,
    /// ID of the analyzed trace
    pub trace_id: Uuid,
    /// When the analysis ran
    pub analyzed_at: DateTime<Utc>,
    /// Sampling rate used (frames/second)
    pub fps: f64,
    /// Number of analyzed samples
    pub sample_count: usize,
    /// Number of accepted saccades
    pub saccade_count: usize,
    /// Accepted events
    pub events: Vec<SaccadeEvent>,
    /// Rejected candidates with reasons
    pub rejected: Vec<RejectedInterval>,
    /// IRLS iterations the denoiser executed
    pub denoise_iterations: usize,
    /// Whether the denoiser converged
    pub denoise_converged: bool,
}

impl AnalysisReport {
    /// Build a report from a trace and its detection result
    pub fn new(trace: &GazeTrace, detection: &Detection) -> Self {
        Self {
            trace_name: trace.metadata.name.clone(),
            trace_id: trace.metadata.id,
            analyzed_at: Utc::now(),
            fps: trace.fps,
            sample_count: detection.labels.len(),
            saccade_count: detection.saccade_count(),
            events: detection.events.clone(),
            rejected: detection.rejected.clone(),
            denoise_iterations: detection.denoise_iterations,
            denoise_converged: detection.denoise_converged,
        }
    }

    /// Write the report as pretty-printed JSON
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a previously written report
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
