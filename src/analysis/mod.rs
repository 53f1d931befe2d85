//! Saccade analysis core
//!
//! This module transforms a noisy eye-position signal into labeled gaze
//! events using four stages, consumed strictly in order:
//! - Edge-preserving IRLS denoising
//! - Angular velocity estimation
//! - Hysteresis candidate segmentation
//! - Physiological post filtering

pub mod denoise;
pub mod events;
pub mod post_filter;
pub mod segmentation;
pub mod velocity;

pub use denoise::{DenoiseResult, Denoiser};
pub use events::{
    CandidateInterval, LabeledEvents, RejectReason, RejectedInterval, SaccadeEvent,
};
pub use post_filter::{FilterOutcome, PostFilter};
pub use segmentation::EventSegmenter;
pub use velocity::VelocityEstimator;
