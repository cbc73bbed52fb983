//! Animated Scalars - Easing and Interpolation
//!
//! Provides the easing curves and the single animated value type that every
//! animator in the icon writes to. A scalar carries at most one active
//! interpolation; starting a new one replaces the old.

use serde::{Deserialize, Serialize};

/// Time in milliseconds
pub type TimePoint = f64;

/// Easing curve shaping the progress of an interpolation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum Easing {
    /// Constant speed
    #[default]
    Linear,
    /// CSS-style cubic bezier with P0=(0,0) and P3=(1,1)
    CubicBezier {
        /// P1 x
        x1: f32,
        /// P1 y
        y1: f32,
        /// P2 x
        x2: f32,
        /// P2 y
        y2: f32,
    },
}

impl Easing {
    /// Standard ease-in-out curve used by the ring amplitude oscillation
    pub const EASE_IN_OUT: Easing = Easing::CubicBezier {
        x1: 0.4,
        y1: 0.0,
        x2: 0.2,
        y2: 1.0,
    };

    /// Soft ease curve used by bar retargeting
    pub const EASE_OUT_QUAD: Easing = Easing::CubicBezier {
        x1: 0.25,
        y1: 0.46,
        x2: 0.45,
        y2: 0.94,
    };

    /// Map linear progress `t` in `[0, 1]` to eased progress
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::CubicBezier { x1, y1, x2, y2 } => solve_cubic_bezier_y(t, x1, y1, x2, y2),
        }
    }
}

/// How an interpolation behaves once it reaches its end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Repeat {
    /// Run once, then complete
    #[default]
    Once,
    /// Restart forever; never completes
    Forever {
        /// Play every other cycle backwards (to -> from)
        mirror: bool,
    },
}

/// A single interpolation request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    /// Start value
    pub from: f32,
    /// End value
    pub to: f32,
    /// Duration of one cycle in milliseconds
    pub duration_ms: TimePoint,
    /// Easing curve
    pub easing: Easing,
    /// Repeat behaviour
    pub repeat: Repeat,
}

impl Tween {
    /// Create a linear, non-repeating tween
    pub fn new(from: f32, to: f32, duration_ms: TimePoint) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing: Easing::Linear,
            repeat: Repeat::Once,
        }
    }

    /// Use the given easing curve
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Use the given repeat mode
    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Value at `progress` in `[0, 1]`, running forwards or backwards
    fn sample(&self, progress: f32, forward: bool) -> f32 {
        let eased = self.easing.apply(progress);
        if forward {
            self.from + (self.to - self.from) * eased
        } else {
            self.to + (self.from - self.to) * eased
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ActiveTween {
    tween: Tween,
    elapsed: TimePoint,
    forward: bool,
}

/// A floating point value with an optional active interpolation.
///
/// The dirty flag is raised every time the value changes and cleared by
/// [`AnimatedScalar::take_dirty`], so a renderer can skip untouched values.
#[derive(Debug, Clone)]
pub struct AnimatedScalar {
    value: f32,
    active: Option<ActiveTween>,
    dirty: bool,
}

impl AnimatedScalar {
    /// Create a resting scalar
    pub fn new(value: f32) -> Self {
        Self {
            value,
            active: None,
            dirty: true,
        }
    }

    /// Current value
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Whether an interpolation is running
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// The running interpolation, if any
    pub fn tween(&self) -> Option<&Tween> {
        self.active.as_ref().map(|a| &a.tween)
    }

    /// Return and clear the dirty flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Start an interpolation, replacing any running one.
    ///
    /// The value jumps to `tween.from` immediately.
    pub fn start(&mut self, tween: Tween) {
        self.set(tween.from);
        self.active = Some(ActiveTween {
            tween,
            elapsed: 0.0,
            forward: true,
        });
    }

    /// Stop the running interpolation, keeping the current value
    pub fn stop(&mut self) {
        self.active = None;
    }

    /// Advance by `dt` milliseconds.
    ///
    /// Returns `true` exactly once, on the step a non-repeating interpolation
    /// finishes. Repeating interpolations never finish.
    pub fn step(&mut self, dt: TimePoint) -> bool {
        let Some(mut active) = self.active else {
            return false;
        };
        let tween = active.tween;

        if tween.duration_ms <= 0.0 {
            self.set(tween.to);
            if tween.repeat == Repeat::Once {
                self.active = None;
                return true;
            }
            return false;
        }

        active.elapsed += dt.max(0.0);

        match tween.repeat {
            Repeat::Once => {
                if active.elapsed >= tween.duration_ms {
                    self.set(tween.to);
                    self.active = None;
                    return true;
                }
            }
            Repeat::Forever { mirror } => {
                if active.elapsed >= tween.duration_ms {
                    let cycles = (active.elapsed / tween.duration_ms).floor();
                    active.elapsed -= cycles * tween.duration_ms;
                    // Guard against rounding leaving elapsed == duration
                    if active.elapsed >= tween.duration_ms {
                        active.elapsed = 0.0;
                    }
                    if mirror && (cycles as u64) % 2 == 1 {
                        active.forward = !active.forward;
                    }
                }
            }
        }

        let progress = (active.elapsed / tween.duration_ms) as f32;
        self.set(tween.sample(progress, active.forward));
        self.active = Some(active);
        false
    }

    fn set(&mut self, value: f32) {
        if value != self.value {
            self.value = value;
            self.dirty = true;
        }
    }
}

/// Solves cubic Bezier curve for t given x, then evaluates y at t.
/// P0=(0,0), P3=(1,1). P1=(x1, y1), P2=(x2, y2).
fn solve_cubic_bezier_y(x: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let bezier_x = |t: f32| {
        let u = 1.0 - t;
        3.0 * u * u * t * x1 + 3.0 * u * t * t * x2 + t * t * t
    };

    // Newton-Raphson first, bisection if it stalls
    let mut t = x;
    let mut converged = false;
    for _ in 0..8 {
        let xt = bezier_x(t);
        if (xt - x).abs() < 1e-5 {
            converged = true;
            break;
        }

        let u = 1.0 - t;
        let dxdt = 3.0 * u * u * x1 + 6.0 * u * t * (x2 - x1) + 3.0 * t * t * (1.0 - x2);
        if dxdt.abs() < 1e-5 {
            break;
        }

        t = (t - (xt - x) / dxdt).clamp(0.0, 1.0);
    }

    if !converged {
        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        t = x;
        for _ in 0..32 {
            let xt = bezier_x(t);
            if (xt - x).abs() < 1e-6 {
                break;
            }
            if xt < x {
                lo = t;
            } else {
                hi = t;
            }
            t = 0.5 * (lo + hi);
        }
    }

    let u = 1.0 - t;
    3.0 * u * u * t * y1 + 3.0 * u * t * t * y2 + t * t * t
}


#[cfg(test)]
mod test_bezier {
    use super::*;

    #[test]
    fn test_cubic_bezier_solver() {
        // Linear
        let y = solve_cubic_bezier_y(0.5, 0.0, 0.0, 1.0, 1.0);
        assert!((y - 0.5).abs() < 0.01);

        // Ease-In (P1=(0.5, 0.0), P2=(1.0, 1.0))
        let y_ease_in = solve_cubic_bezier_y(0.25, 0.5, 0.0, 1.0, 1.0);
        assert!(y_ease_in < 0.25);
    }

    #[test]
    fn test_standard_curve_is_monotonic() {
        let mut prev = 0.0;
        for i in 1..=50 {
            let y = Easing::EASE_IN_OUT.apply(i as f32 / 50.0);
            assert!(y >= prev - 1e-5);
            prev = y;
        }
    }
}
