//! Frame Clock - Single-threaded Animation Scheduling
//!
//! Animators never own a timer. They allocate scalar slots on a [`Scheduler`]
//! and request interpolations on them; completion callbacks run synchronously
//! inside [`FrameClock::advance`] and may schedule the next interpolation,
//! which is how the infinite bar loops are expressed.
//!
//! # Cancellation
//!
//! Each animator holds a [`MountGuard`]. Continuations capture a
//! [`MountToken`] and check it before rescheduling, so a continuation that
//! outlives its animator does nothing. Releasing a slot additionally drops its
//! pending continuation without running it.

use crate::animation::{AnimatedScalar, TimePoint, Tween};
use std::cell::Cell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use tracing::trace;

/// Handle to a scalar slot owned by a scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScalarHandle(u64);

impl ScalarHandle {
    /// Raw slot id
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Callback run once when a non-repeating interpolation finishes
pub type Completion = Box<dyn FnOnce(&mut dyn Scheduler)>;

/// Scheduling surface exposed to animators
pub trait Scheduler {
    /// Allocate a resting scalar and return its handle
    fn allocate_scalar(&mut self, initial: f32) -> ScalarHandle;

    /// Free a scalar, dropping its interpolation and pending continuation
    fn release_scalar(&mut self, handle: ScalarHandle);

    /// Start an interpolation on `handle`, replacing any running one.
    ///
    /// `on_complete` runs once when a [`crate::Repeat::Once`] tween finishes.
    /// Returns `false` if the handle has been released.
    fn schedule_interpolation(
        &mut self,
        handle: ScalarHandle,
        tween: Tween,
        on_complete: Option<Completion>,
    ) -> bool;

    /// Stop the interpolation on `handle` without running its continuation
    fn cancel(&mut self, handle: ScalarHandle);

    /// Current value of a live scalar
    fn value(&self, handle: ScalarHandle) -> Option<f32>;

    /// The interpolation running on `handle`, if any
    fn tween(&self, handle: ScalarHandle) -> Option<Tween>;

    /// Return and clear the dirty flag of a scalar; `false` once released
    fn take_dirty(&mut self, handle: ScalarHandle) -> bool;

    /// Current clock time in milliseconds
    fn now(&self) -> TimePoint;
}

/// Lifetime flag shared between an animator and its continuations
#[derive(Debug, Clone)]
pub struct MountToken(Rc<Cell<bool>>);

impl MountToken {
    /// Whether the owning animator is still mounted
    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }
}

/// Owner side of a [`MountToken`]; unmounts when dropped
#[derive(Debug)]
pub struct MountGuard(MountToken);

impl MountGuard {
    /// Create a mounted guard
    pub fn new() -> Self {
        Self(MountToken(Rc::new(Cell::new(true))))
    }

    /// A token observing this guard
    pub fn token(&self) -> MountToken {
        self.0.clone()
    }

    /// Mark as unmounted
    pub fn unmount(&self) {
        (self.0).0.set(false);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MountGuard {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Counters describing clock activity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockStats {
    /// Scalars ever allocated
    pub scalars_allocated: u64,
    /// Interpolations ever scheduled
    pub timers_scheduled: u64,
    /// Continuations that ran
    pub completions_run: u64,
    /// Continuations dropped by cancel, release or replacement
    pub completions_dropped: u64,
}

struct Slot {
    scalar: AnimatedScalar,
    on_complete: Option<Completion>,
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("scalar", &self.scalar)
            .field("has_continuation", &self.on_complete.is_some())
            .finish()
    }
}

/// Deterministic frame clock driving every animated scalar
#[derive(Debug, Default)]
pub struct FrameClock {
    now: TimePoint,
    next_id: u64,
    slots: BTreeMap<ScalarHandle, Slot>,
    stats: ClockStats,
}

impl FrameClock {
    /// Create a clock at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance all interpolations by `dt` milliseconds (call every frame).
    ///
    /// Continuations of interpolations that finished during this step run
    /// afterwards, in slot order. Interpolations they schedule start on the
    /// next call.
    pub fn advance(&mut self, dt: TimePoint) {
        self.now += dt;

        let mut ready = Vec::new();
        for (handle, slot) in self.slots.iter_mut() {
            if slot.scalar.step(dt) {
                if let Some(completion) = slot.on_complete.take() {
                    ready.push((*handle, completion));
                }
            }
        }

        for (handle, completion) in ready {
            trace!("Running continuation for scalar {}", handle.id());
            self.stats.completions_run += 1;
            completion(&mut *self);
        }
    }

    /// Number of live scalar slots
    pub fn live_scalars(&self) -> usize {
        self.slots.len()
    }

    /// Number of scalars with a running interpolation
    pub fn active_timers(&self) -> usize {
        self.slots.values().filter(|s| s.scalar.is_animating()).count()
    }

    /// Number of continuations waiting for their interpolation to finish
    pub fn pending_continuations(&self) -> usize {
        self.slots
            .values()
            .filter(|s| s.on_complete.is_some())
            .count()
    }

    /// Lifetime counters
    pub fn stats(&self) -> ClockStats {
        self.stats
    }
}

impl Scheduler for FrameClock {
    fn allocate_scalar(&mut self, initial: f32) -> ScalarHandle {
        let handle = ScalarHandle(self.next_id);
        self.next_id += 1;
        self.slots.insert(
            handle,
            Slot {
                scalar: AnimatedScalar::new(initial),
                on_complete: None,
            },
        );
        self.stats.scalars_allocated += 1;
        handle
    }

    fn release_scalar(&mut self, handle: ScalarHandle) {
        if let Some(slot) = self.slots.remove(&handle) {
            if slot.on_complete.is_some() {
                self.stats.completions_dropped += 1;
            }
        }
    }

    fn schedule_interpolation(
        &mut self,
        handle: ScalarHandle,
        tween: Tween,
        on_complete: Option<Completion>,
    ) -> bool {
        let Some(slot) = self.slots.get_mut(&handle) else {
            trace!("Ignoring interpolation on released scalar {}", handle.id());
            return false;
        };

        if slot.on_complete.take().is_some() {
            self.stats.completions_dropped += 1;
        }
        slot.scalar.start(tween);
        slot.on_complete = on_complete;
        self.stats.timers_scheduled += 1;
        true
    }

    fn cancel(&mut self, handle: ScalarHandle) {
        if let Some(slot) = self.slots.get_mut(&handle) {
            slot.scalar.stop();
            if slot.on_complete.take().is_some() {
                self.stats.completions_dropped += 1;
            }
        }
    }

    fn value(&self, handle: ScalarHandle) -> Option<f32> {
        self.slots.get(&handle).map(|slot| slot.scalar.value())
    }

    fn tween(&self, handle: ScalarHandle) -> Option<Tween> {
        self.slots
            .get(&handle)
            .and_then(|slot| slot.scalar.tween().copied())
    }

    fn take_dirty(&mut self, handle: ScalarHandle) -> bool {
        self.slots
            .get_mut(&handle)
            .is_some_and(|slot| slot.scalar.take_dirty())
    }

    fn now(&self) -> TimePoint {
        self.now
    }
}
