//! Icon Composite
//!
//! [`SpectrumIcon`] owns the animators for one mounted icon and assembles a
//! [`Scene`] from static artwork and the current animated values each frame.
//! A static icon creates no scalars and schedules nothing.

use crate::artwork::{
    Blob, Outline, BLOBS, RING_OUTLINE, VIEW_BOX_HEIGHT, VIEW_BOX_WIDTH,
};
use crate::bars::{BarAnimator, BarRect, BARS};
use crate::rings::{RingAnimator, RINGS};
use crate::scheduler::Scheduler;
use crate::wave::WaveCurve;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use tracing::debug;

/// Icon options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Rendered width in pixels; height follows the 176:171 aspect ratio
    pub size: f32,
    /// Whether rings and bars animate
    pub animated: bool,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            size: VIEW_BOX_WIDTH,
            animated: false,
        }
    }
}

/// One drawable item of the icon
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Blurred gradient blob
    Blob(&'static Blob),
    /// Animated glow ring
    Wave {
        /// Curve for this frame, shared with the ring's cache
        curve: Rc<WaveCurve>,
        /// Fill gradient id
        gradient_id: &'static str,
        /// Blur filter id
        filter_id: &'static str,
    },
    /// Static bar
    StaticBar(BarRect),
    /// Animated bar at its current height
    AnimatedBar(BarRect),
    /// Ring outline
    Outline(&'static Outline),
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Rendered width
    pub width: f32,
    /// Rendered height
    pub height: f32,
    /// Elements in draw order
    pub elements: Vec<Element>,
}

impl Scene {
    /// Scale from view box units to output pixels
    pub fn scale(&self) -> f32 {
        self.width / VIEW_BOX_WIDTH
    }

    /// Number of background blobs
    pub fn blob_count(&self) -> usize {
        self.count(|e| matches!(e, Element::Blob(_)))
    }

    /// Number of wave rings
    pub fn wave_count(&self) -> usize {
        self.count(|e| matches!(e, Element::Wave { .. }))
    }

    /// Number of outlines
    pub fn outline_count(&self) -> usize {
        self.count(|e| matches!(e, Element::Outline(_)))
    }

    /// All bars, static or animated, left to right
    pub fn bars(&self) -> Vec<&BarRect> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                Element::StaticBar(rect) | Element::AnimatedBar(rect) => Some(rect),
                _ => None,
            })
            .collect()
    }

    /// Number of static bars
    pub fn static_bar_count(&self) -> usize {
        self.count(|e| matches!(e, Element::StaticBar(_)))
    }

    /// Number of animated bars
    pub fn animated_bar_count(&self) -> usize {
        self.count(|e| matches!(e, Element::AnimatedBar(_)))
    }

    fn count(&self, pred: impl Fn(&Element) -> bool) -> usize {
        self.elements.iter().filter(|e| pred(e)).count()
    }
}

/// A mounted spectrum icon
#[derive(Debug)]
pub struct SpectrumIcon {
    config: IconConfig,
    rings: Vec<RingAnimator>,
    bars: Vec<BarAnimator>,
}

impl SpectrumIcon {
    /// Mount the icon with a random seed
    pub fn mount(config: IconConfig, scheduler: &mut dyn Scheduler) -> Self {
        let seed = rand::rng().random();
        Self::mount_seeded(config, scheduler, seed)
    }

    /// Mount the icon; animators draw their randomness from `seed`
    pub fn mount_seeded(config: IconConfig, scheduler: &mut dyn Scheduler, seed: u64) -> Self {
        if !config.animated {
            debug!("Mounted static spectrum icon (size {})", config.size);
            return Self {
                config,
                rings: Vec::new(),
                bars: Vec::new(),
            };
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let rings = RINGS
            .iter()
            .map(|spec| RingAnimator::mount(*spec, scheduler, &mut rng))
            .collect::<Vec<_>>();
        let bars = BARS
            .iter()
            .map(|spec| {
                let bar_rng = StdRng::seed_from_u64(rng.random());
                BarAnimator::mount(*spec, scheduler, bar_rng)
            })
            .collect::<Vec<_>>();

        debug!(
            "Mounted animated spectrum icon (size {}, {} rings, {} bars, seed {})",
            config.size,
            rings.len(),
            bars.len(),
            seed
        );

        Self {
            config,
            rings,
            bars,
        }
    }

    /// Stop every animator and release its scalars
    pub fn unmount(self, scheduler: &mut dyn Scheduler) {
        let (rings, bars) = (self.rings.len(), self.bars.len());
        for ring in self.rings {
            ring.unmount(scheduler);
        }
        for bar in self.bars {
            bar.unmount(scheduler);
        }
        debug!("Unmounted spectrum icon ({} rings, {} bars)", rings, bars);
    }

    /// Options this icon was mounted with
    pub fn config(&self) -> &IconConfig {
        &self.config
    }

    /// Ring animators (empty when static)
    pub fn rings(&self) -> &[RingAnimator] {
        &self.rings
    }

    /// Bar animators (empty when static)
    pub fn bars(&self) -> &[BarAnimator] {
        &self.bars
    }

    /// Rendered width and height
    pub fn dimensions(&self) -> (f32, f32) {
        let width = self.config.size;
        (width, width * VIEW_BOX_HEIGHT / VIEW_BOX_WIDTH)
    }

    /// Assemble the scene for the current frame.
    ///
    /// Reading the rings clears their scalars' dirty flags, so wave curves
    /// are only rebuilt after the clock has moved them.
    pub fn frame(&self, scheduler: &mut dyn Scheduler) -> Scene {
        let (width, height) = self.dimensions();
        let mut elements = Vec::with_capacity(BLOBS.len() + RINGS.len() + BARS.len() + 1);

        elements.extend(BLOBS.iter().map(Element::Blob));

        elements.extend(self.rings.iter().map(|ring| Element::Wave {
            curve: ring.curve(&mut *scheduler),
            gradient_id: ring.spec().gradient_id,
            filter_id: ring.spec().filter_id,
        }));

        if self.config.animated {
            elements.extend(
                self.bars
                    .iter()
                    .map(|bar| Element::AnimatedBar(bar.rect(&*scheduler))),
            );
        } else {
            elements.extend(BARS.iter().map(|spec| Element::StaticBar(spec.static_rect())));
        }

        elements.push(Element::Outline(&RING_OUTLINE));

        Scene {
            width,
            height,
            elements,
        }
    }
}
