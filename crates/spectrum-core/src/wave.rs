//! Wave Rings - Procedural Closed Curves
//!
//! A wave ring is a circle whose radius is perturbed by a sine wave:
//! `r(θ) = base_radius + amplitude · sin(frequency · θ + phase)`.
//! The curve is sampled every [`ANGLE_STEP`] radians and consecutive samples
//! are joined by quadratic segments whose control point is pushed outwards by
//! a fraction of the local wave offset, which rounds off the polygon into an
//! organic wobble.
//!
//! Curves are cheap to build (one sine per sample) and are rebuilt every
//! frame instead of cached.

use glam::Vec2;
use std::fmt::Write;

/// Angular distance between samples (radians)
pub const ANGLE_STEP: f32 = 0.02;

/// Number of samples in `[0, 2π]` at [`ANGLE_STEP`]
pub const SAMPLE_COUNT: usize = 315;

/// Fraction of the wave offset applied to each control point
pub const CONTROL_OFFSET_FACTOR: f32 = 0.1;

/// Static parameters of one wave ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveShape {
    /// Ring center in icon coordinates
    pub center: Vec2,
    /// Unperturbed radius
    pub base_radius: f32,
    /// Number of wave crests around the ring
    pub frequency: f32,
}

impl WaveShape {
    /// Create a shape filling a `width` × `height` box around `center`
    pub fn new(center: Vec2, width: f32, height: f32, frequency: f32) -> Self {
        Self {
            center,
            base_radius: width.min(height) / 2.0,
            frequency,
        }
    }

    /// Radial wave offset at angle `theta`
    pub fn offset(&self, theta: f32, amplitude: f32, phase: f32) -> f32 {
        (theta * self.frequency + phase).sin() * amplitude
    }

    /// Point on the perturbed circle at angle `theta`
    pub fn point(&self, theta: f32, amplitude: f32, phase: f32) -> Vec2 {
        let radius = self.base_radius + self.offset(theta, amplitude, phase);
        self.center + Vec2::new(theta.cos(), theta.sin()) * radius
    }

    /// Build the closed curve for the current amplitude and phase
    pub fn curve(&self, amplitude: f32, phase: f32) -> WaveCurve {
        let start = self.point(0.0, amplitude, phase);
        let mut segments = Vec::with_capacity(SAMPLE_COUNT - 1);
        let mut prev = start;

        for i in 1..SAMPLE_COUNT {
            let theta = i as f32 * ANGLE_STEP;
            let offset = self.offset(theta, amplitude, phase);
            let end = self.point(theta, amplitude, phase);

            let mid_angle = theta - ANGLE_STEP / 2.0;
            let control = (prev + end) / 2.0
                + Vec2::new(mid_angle.cos(), mid_angle.sin()) * (offset * CONTROL_OFFSET_FACTOR);

            segments.push(QuadSegment { control, end });
            prev = end;
        }

        WaveCurve { start, segments }
    }
}

/// Quadratic curve segment continuing from the previous end point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadSegment {
    /// Control point
    pub control: Vec2,
    /// End point
    pub end: Vec2,
}

/// Closed path made of quadratic segments
#[derive(Debug, Clone, PartialEq)]
pub struct WaveCurve {
    /// First sample (θ = 0)
    pub start: Vec2,
    /// Segments to every following sample; the path closes back to `start`
    pub segments: Vec<QuadSegment>,
}

impl WaveCurve {
    /// All sampled points, starting with `start`
    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        std::iter::once(self.start).chain(self.segments.iter().map(|s| s.end))
    }

    /// Number of sampled points
    pub fn len(&self) -> usize {
        self.segments.len() + 1
    }

    /// Always false; a curve has at least its start point
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Last sampled point
    pub fn last(&self) -> Vec2 {
        self.segments.last().map(|s| s.end).unwrap_or(self.start)
    }

    /// SVG path data (`M`, `Q`…, `Z`)
    pub fn path_data(&self) -> String {
        let mut d = String::with_capacity(self.segments.len() * 40);
        let _ = write!(d, "M {:.3} {:.3}", self.start.x, self.start.y);
        for seg in &self.segments {
            let _ = write!(
                d,
                " Q {:.3} {:.3} {:.3} {:.3}",
                seg.control.x, seg.control.y, seg.end.x, seg.end.y
            );
        }
        d.push_str(" Z");
        d
    }
}
