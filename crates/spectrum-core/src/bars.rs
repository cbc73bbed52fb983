//! Spectrum Bars - Random-walk Height Animation
//!
//! Each of the nine bars retargets forever: pick a random height, ease to it
//! over a random 200-300 ms, then pick again. The loop is a chain of
//! continuations on the [`Scheduler`]; every link carries the bar's own RNG
//! forward and checks the bar's [`MountToken`] before scheduling the next.
//!
//! Bars grow symmetrically around their baseline: `y = base_y - height / 2`.

use crate::animation::{Easing, TimePoint, Tween};
use crate::artwork::FOREGROUND;
use crate::scheduler::{MountGuard, MountToken, ScalarHandle, Scheduler};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::trace;

/// Bar width
pub const BAR_WIDTH: f32 = 3.66413;

/// Bar corner radius (fully rounded ends)
pub const BAR_CORNER_RADIUS: f32 = 1.83207;

/// Smallest height a retarget can pick
pub const MIN_BAR_HEIGHT: f32 = 4.0;

/// Shortest retarget duration (ms)
pub const RETARGET_MIN_MS: TimePoint = 200.0;

/// Random extra retarget duration (ms)
pub const RETARGET_JITTER_MS: TimePoint = 100.0;

/// Fixed layout of one bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSpec {
    /// Left edge
    pub x: f32,
    /// Top edge of the static artwork
    pub static_y: f32,
    /// Static height, also the animated starting height
    pub base_height: f32,
    /// Random range added on top of [`MIN_BAR_HEIGHT`]
    pub max_height: f32,
    /// Vertical center the animated bar grows around
    pub base_y: f32,
}

impl BarSpec {
    /// Rectangle for the static artwork
    pub fn static_rect(&self) -> BarRect {
        BarRect::new(self.x, self.static_y, self.base_height)
    }

    /// Rectangle for an animated height
    pub fn rect_for_height(&self, height: f32) -> BarRect {
        BarRect::new(self.x, self.base_y - height / 2.0, height)
    }

    /// Exclusive upper bound of retarget heights
    pub fn height_ceiling(&self) -> f32 {
        self.max_height + MIN_BAR_HEIGHT
    }
}

const fn bar(x: f32, static_y: f32, base_height: f32, max_height: f32, base_y: f32) -> BarSpec {
    BarSpec {
        x,
        static_y,
        base_height,
        max_height,
        base_y,
    }
}

/// The nine bars, left to right
pub const BARS: [BarSpec; 9] = [
    bar(41.6035, 75.417, 7.32826, 20.0, 79.4093),
    bar(50.7637, 68.0889, 21.9848, 35.0, 79.0661),
    bar(59.9238, 76.333, 5.4962, 18.0, 79.5773),
    bar(69.084, 64.4248, 29.313, 45.0, 79.0813),
    bar(78.2441, 71.7529, 14.6565, 30.0, 79.2376),
    bar(87.4043, 74.501, 9.16033, 25.0, 79.4415),
    bar(96.5664, 70.8369, 16.4886, 32.0, 79.2812),
    bar(105.727, 76.333, 5.4962, 18.0, 79.5773),
    bar(114.887, 68.0889, 21.9848, 35.0, 79.0661),
];

/// Rounded rectangle of a rendered bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
    /// Corner radius
    pub corner_radius: f32,
    /// Fill color
    pub fill: &'static str,
}

impl BarRect {
    fn new(x: f32, y: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: BAR_WIDTH,
            height,
            corner_radius: BAR_CORNER_RADIUS,
            fill: FOREGROUND,
        }
    }
}

/// One bar's infinite retarget loop
#[derive(Debug)]
pub struct BarAnimator {
    spec: BarSpec,
    height: ScalarHandle,
    guard: MountGuard,
}

impl BarAnimator {
    /// Allocate the height scalar and start retargeting
    pub fn mount(spec: BarSpec, scheduler: &mut dyn Scheduler, rng: StdRng) -> Self {
        let height = scheduler.allocate_scalar(spec.base_height);
        let guard = MountGuard::new();

        Retarget {
            spec,
            handle: height,
            token: guard.token(),
            rng,
        }
        .schedule(scheduler);

        Self {
            spec,
            height,
            guard,
        }
    }

    /// Stop the loop and free the height scalar
    pub fn unmount(self, scheduler: &mut dyn Scheduler) {
        self.guard.unmount();
        scheduler.release_scalar(self.height);
    }

    /// Layout of this bar
    pub fn spec(&self) -> &BarSpec {
        &self.spec
    }

    /// Handle of the height scalar
    pub fn height_handle(&self) -> ScalarHandle {
        self.height
    }

    /// Current height
    pub fn height(&self, scheduler: &dyn Scheduler) -> f32 {
        scheduler
            .value(self.height)
            .unwrap_or(self.spec.base_height)
    }

    /// Rectangle at the current height
    pub fn rect(&self, scheduler: &dyn Scheduler) -> BarRect {
        self.spec.rect_for_height(self.height(scheduler))
    }
}

struct Retarget {
    spec: BarSpec,
    handle: ScalarHandle,
    token: MountToken,
    rng: StdRng,
}

impl Retarget {
    fn schedule(mut self, scheduler: &mut dyn Scheduler) {
        if !self.token.is_mounted() {
            trace!("Bar at x={} unmounted, stopping retarget loop", self.spec.x);
            return;
        }
        let Some(current) = scheduler.value(self.handle) else {
            return;
        };

        let target = self.rng.random::<f32>() * self.spec.max_height + MIN_BAR_HEIGHT;
        let duration = RETARGET_MIN_MS + self.rng.random::<f64>() * RETARGET_JITTER_MS;
        let tween = Tween::new(current, target, duration).with_easing(Easing::EASE_OUT_QUAD);

        let handle = self.handle;
        scheduler.schedule_interpolation(
            handle,
            tween,
            Some(Box::new(move |next: &mut dyn Scheduler| self.schedule(next))),
        );
    }
}
