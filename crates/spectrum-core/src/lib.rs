//! Spectrum Core - Animated Icon Model
//!
//! This crate contains everything needed to produce the spectrum icon scene
//! frame by frame, independent of any rendering backend:
//! - Static artwork (blobs, gradients, blur filters, ring outline)
//! - Easing curves and animated scalars
//! - A single-threaded frame clock with cancellable continuations
//! - Wave ring curve generation
//! - Bar and ring animators
//! - The icon composite that assembles a [`Scene`] each frame

#![warn(missing_docs)]

pub use glam::Vec2;
use thiserror::Error;

pub mod animation;
pub mod artwork;
pub mod bars;
pub mod config;
pub mod logging;
pub mod rings;
pub mod scene;
pub mod scheduler;
pub mod wave;

// --- Re-exports grouped by category ---

// Animation
pub use animation::{AnimatedScalar, Easing, Repeat, TimePoint, Tween};
pub use scheduler::{
    ClockStats, Completion, FrameClock, MountGuard, MountToken, ScalarHandle, Scheduler,
};

// Animators
pub use bars::{BarAnimator, BarRect, BarSpec, BARS};
pub use rings::{RingAnimator, RingSpec, RINGS};

// Geometry
pub use wave::{QuadSegment, WaveCurve, WaveShape};

// Composite
pub use scene::{Element, IconConfig, Scene, SpectrumIcon};

// Logging & Configuration
pub use logging::LogConfig;

/// Core error types
#[derive(Error, Debug)]
pub enum CoreError {
    /// Filesystem access failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be parsed or serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.to_string(), "I/O error: gone");
    }
}
