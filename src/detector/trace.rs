//! Gaze Trace Data Structures
//!
//! Defines the serialization format for position signals handed over by the
//! upstream tracking pipeline (one sample per video frame with a successful
//! detection, in frame order).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// Current trace format version
pub const CURRENT_FORMAT_VERSION: &str = "1.0";

/// Trace metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceMetadata {
    /// Unique trace ID
    pub id: Uuid,
    /// Trace name
    pub name: String,
    /// Originating video or pipeline, if known
    pub source: Option<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Number of position samples
    pub sample_count: usize,
    /// Version of the trace format
    pub format_version: String,
}

impl TraceMetadata {
    /// Create new metadata for a trace
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            source: None,
            created_at: Utc::now(),
            sample_count: 0,
            format_version: CURRENT_FORMAT_VERSION.to_string(),
        }
    }
}

impl Default for TraceMetadata {
    fn default() -> Self {
        Self::new(String::new())
    }
}

/// A recorded one-dimensional gaze position signal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GazeTrace {
    /// Trace metadata
    pub metadata: TraceMetadata,
    /// Sampling rate of the source video (frames/second)
    pub fps: f64,
    /// Position samples in pixels, strictly index-ordered
    pub positions: Vec<f64>,
}

impl GazeTrace {
    /// Create a new empty trace
    pub fn new(name: String, fps: f64) -> Self {
        Self {
            metadata: TraceMetadata::new(name),
            fps,
            positions: Vec::new(),
        }
    }

    /// Create a trace from an existing position signal
    pub fn from_positions(name: String, fps: f64, positions: Vec<f64>) -> Self {
        let mut trace = Self::new(name, fps);
        trace.metadata.sample_count = positions.len();
        trace.positions = positions;
        trace
    }

    /// Append a position sample
    pub fn push(&mut self, position: f64) {
        self.positions.push(position);
        self.metadata.sample_count = self.positions.len();
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if the trace is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Covered wall-clock duration in seconds
    pub fn duration_s(&self) -> f64 {
        if self.fps > 0.0 {
            self.positions.len() as f64 / self.fps
        } else {
            0.0
        }
    }

    /// Save trace to a file
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a trace from a file.
    ///
    /// Logs a warning if the trace was saved with an unknown format version,
    /// but still attempts to deserialize it (forward-compatible via
    /// `#[serde(default)]` metadata).
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let trace: GazeTrace = serde_json::from_str(&content)?;
        if trace.metadata.format_version != CURRENT_FORMAT_VERSION {
            tracing::warn!(
                name = %trace.metadata.name,
                found = %trace.metadata.format_version,
                expected = CURRENT_FORMAT_VERSION,
                "Trace has different format version; some fields may use default values"
            );
        }
        Ok(trace)
    }
}
