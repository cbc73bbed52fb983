//! Glow Rings - Amplitude and Phase Oscillation
//!
//! Every ring runs two independent infinite loops on its own scalars:
//! - amplitude swings between `base_amplitude` and `max_amplitude`
//!   (mirrored repeat, eased, random period)
//! - phase sweeps `0 → 2π` linearly and restarts (sawtooth), rotating the
//!   wave pattern
//!
//! The wave curve is cached per ring and rebuilt only when the clock reports
//! one of the two scalars as dirty.

use crate::animation::{Easing, Repeat, TimePoint, Tween};
use crate::artwork::ICON_CENTER;
use crate::scheduler::{ScalarHandle, Scheduler};
use crate::wave::{WaveCurve, WaveShape};
use rand::rngs::StdRng;
use rand::Rng;
use std::cell::RefCell;
use std::f32::consts::TAU;
use std::rc::Rc;
use tracing::trace;

/// Phase period per unit of ring speed (ms)
pub const PHASE_MS_PER_SPEED: TimePoint = 800.0;

/// Shortest amplitude half-period (ms)
pub const AMPLITUDE_MIN_MS: TimePoint = 800.0;

/// Random extra amplitude half-period (ms)
pub const AMPLITUDE_JITTER_MS: TimePoint = 200.0;

/// Parameters of one glow ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSpec {
    /// Bounding box size; the ring radius is half of it
    pub diameter: f32,
    /// Fill gradient id
    pub gradient_id: &'static str,
    /// Blur filter id
    pub filter_id: &'static str,
    /// Resting amplitude
    pub base_amplitude: f32,
    /// Peak amplitude
    pub max_amplitude: f32,
    /// Wave crests around the ring
    pub frequency: f32,
    /// Phase period multiplier
    pub speed: f32,
    /// Dominant color of the ring
    pub color: &'static str,
}

impl RingSpec {
    /// Wave geometry of this ring
    pub fn shape(&self) -> WaveShape {
        WaveShape::new(ICON_CENTER, self.diameter, self.diameter, self.frequency)
    }

    /// Duration of one full phase turn (ms)
    pub fn phase_period_ms(&self) -> TimePoint {
        self.speed as TimePoint * PHASE_MS_PER_SPEED
    }
}

/// The four rings, back to front
pub const RINGS: [RingSpec; 4] = [
    RingSpec {
        diameter: 140.0,
        gradient_id: "paint1_animated",
        filter_id: "filter1_f",
        base_amplitude: 2.0,
        max_amplitude: 4.0,
        frequency: 2.0,
        speed: 3.0,
        color: "#13B5D2",
    },
    RingSpec {
        diameter: 120.0,
        gradient_id: "paint0_animated",
        filter_id: "filter0_f",
        base_amplitude: 1.5,
        max_amplitude: 3.5,
        frequency: 3.0,
        speed: 2.5,
        color: "#FF00F5",
    },
    RingSpec {
        diameter: 100.0,
        gradient_id: "paint2_animated",
        filter_id: "filter2_f",
        base_amplitude: 1.0,
        max_amplitude: 3.0,
        frequency: 4.0,
        speed: 2.0,
        color: "#FFF500",
    },
    RingSpec {
        diameter: 110.0,
        gradient_id: "paint3_animated",
        filter_id: "filter3_f",
        base_amplitude: 1.5,
        max_amplitude: 3.5,
        frequency: 5.0,
        speed: 2.2,
        color: "#30D5C8",
    },
];

/// Amplitude and phase loops of one ring
#[derive(Debug)]
pub struct RingAnimator {
    spec: RingSpec,
    amplitude: ScalarHandle,
    phase: ScalarHandle,
    curve: RefCell<Option<Rc<WaveCurve>>>,
}

impl RingAnimator {
    /// Allocate both scalars and start the loops
    pub fn mount(spec: RingSpec, scheduler: &mut dyn Scheduler, rng: &mut StdRng) -> Self {
        let amplitude = scheduler.allocate_scalar(spec.base_amplitude);
        let phase = scheduler.allocate_scalar(0.0);
        let amplitude_period_ms = AMPLITUDE_MIN_MS + rng.random::<f64>() * AMPLITUDE_JITTER_MS;

        scheduler.schedule_interpolation(
            amplitude,
            Tween::new(spec.base_amplitude, spec.max_amplitude, amplitude_period_ms)
                .with_easing(Easing::EASE_IN_OUT)
                .with_repeat(Repeat::Forever { mirror: true }),
            None,
        );
        scheduler.schedule_interpolation(
            phase,
            Tween::new(0.0, TAU, spec.phase_period_ms())
                .with_repeat(Repeat::Forever { mirror: false }),
            None,
        );

        Self {
            spec,
            amplitude,
            phase,
            curve: RefCell::new(None),
        }
    }

    /// Stop both loops and free the scalars
    pub fn unmount(self, scheduler: &mut dyn Scheduler) {
        scheduler.release_scalar(self.amplitude);
        scheduler.release_scalar(self.phase);
    }

    /// Parameters of this ring
    pub fn spec(&self) -> &RingSpec {
        &self.spec
    }

    /// Randomized amplitude half-period (ms), `None` once unmounted
    pub fn amplitude_period_ms(&self, scheduler: &dyn Scheduler) -> Option<TimePoint> {
        scheduler
            .tween(self.amplitude)
            .map(|tween| tween.duration_ms)
    }

    /// Current amplitude
    pub fn amplitude(&self, scheduler: &dyn Scheduler) -> f32 {
        scheduler
            .value(self.amplitude)
            .unwrap_or(self.spec.base_amplitude)
    }

    /// Current phase (radians)
    pub fn phase(&self, scheduler: &dyn Scheduler) -> f32 {
        scheduler.value(self.phase).unwrap_or(0.0)
    }

    /// Wave curve for the current frame.
    ///
    /// Consumes the dirty flags of both scalars; the previous curve is
    /// returned as long as neither value changed.
    pub fn curve(&self, scheduler: &mut dyn Scheduler) -> Rc<WaveCurve> {
        // Both flags must be cleared, so no short-circuit
        let amplitude_dirty = scheduler.take_dirty(self.amplitude);
        let phase_dirty = scheduler.take_dirty(self.phase);

        let mut cached = self.curve.borrow_mut();
        match cached.as_ref() {
            Some(curve) if !amplitude_dirty && !phase_dirty => Rc::clone(curve),
            _ => {
                trace!("Rebuilding wave curve for ring {}", self.spec.diameter);
                let curve = Rc::new(
                    self.spec
                        .shape()
                        .curve(self.amplitude(&*scheduler), self.phase(&*scheduler)),
                );
                *cached = Some(Rc::clone(&curve));
                curve
            }
        }
    }
}
