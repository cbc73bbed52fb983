//! Static icon artwork.
//!
//! Coordinates are in the icon's 176 × 171 view box.

use glam::Vec2;

/// View box width
pub const VIEW_BOX_WIDTH: f32 = 176.0;

/// View box height
pub const VIEW_BOX_HEIGHT: f32 = 171.0;

/// Center shared by the ring outline and every wave ring
pub const ICON_CENTER: Vec2 = Vec2::new(83.2319, 78.4582);

/// Fill used by bars and the outline stroke
pub const FOREGROUND: &str = "white";

/// One gradient color stop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Offset in `[0, 1]`
    pub offset: f32,
    /// CSS color
    pub color: &'static str,
    /// Stop opacity
    pub opacity: f32,
}

/// Linear gradient in user space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient {
    /// Element id
    pub id: &'static str,
    /// Gradient start
    pub start: Vec2,
    /// Gradient end
    pub end: Vec2,
    /// Color stops
    pub stops: [GradientStop; 2],
}

/// Radial gradient mapped onto an ellipse
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGradient {
    /// Element id
    pub id: &'static str,
    /// Ellipse center
    pub center: Vec2,
    /// Ellipse radii before rotation
    pub scale: Vec2,
    /// Rotation in degrees
    pub rotate_deg: f32,
    /// Color stops
    pub stops: [GradientStop; 2],
}

/// Gaussian blur filter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurFilter {
    /// Element id
    pub id: &'static str,
    /// Blur standard deviation
    pub std_deviation: f32,
}

/// Blurred background blob
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blob {
    /// SVG path data
    pub path: &'static str,
    /// Fill gradient id
    pub gradient_id: &'static str,
    /// Blur filter id
    pub filter_id: &'static str,
}

/// Ring outline drawn on top of everything
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    /// SVG path data
    pub path: &'static str,
    /// Fill gradient id
    pub gradient_id: &'static str,
    /// Stroke color
    pub stroke: &'static str,
    /// Stroke width
    pub stroke_width: f32,
}

const fn stop(offset: f32, color: &'static str, opacity: f32) -> GradientStop {
    GradientStop {
        offset,
        color,
        opacity,
    }
}

/// Blur filters, one per blob
pub static FILTERS: [BlurFilter; 4] = [
    BlurFilter {
        id: "filter0_f",
        std_deviation: 6.42834,
    },
    BlurFilter {
        id: "filter1_f",
        std_deviation: 9.14269,
    },
    BlurFilter {
        id: "filter2_f",
        std_deviation: 6.42834,
    },
    BlurFilter {
        id: "filter3_f",
        std_deviation: 8.76918,
    },
];

/// Blob fills
pub static BLOB_GRADIENTS: [LinearGradient; 4] = [
    LinearGradient {
        id: "paint0_linear",
        start: Vec2::new(53.1933, 43.4491),
        end: Vec2::new(93.0427, 96.3667),
        stops: [stop(0.0, "#FF00F5", 1.0), stop(1.0, "#6C5FFE", 0.0)],
    },
    LinearGradient {
        id: "paint1_linear",
        start: Vec2::new(46.4643, 30.6569),
        end: Vec2::new(103.14, 105.919),
        stops: [stop(0.0, "#13B5D2", 1.0), stop(1.0, "#6C5FFE", 0.0)],
    },
    LinearGradient {
        id: "paint2_linear",
        start: Vec2::new(94.3856, 68.4078),
        end: Vec2::new(94.3856, 128.433),
        stops: [stop(0.0, "#FFF500", 0.58), stop(1.0, "#9CFFED", 0.0)],
    },
    LinearGradient {
        id: "paint3_linear",
        start: Vec2::new(78.4552, 70.3488),
        end: Vec2::new(149.32, 110.802),
        stops: [stop(0.0, "#30D5C8", 1.0), stop(1.0, "#9CFFED", 0.0)],
    },
];

/// Faded copies of the blob fills used by the wave rings
pub static WAVE_GRADIENTS: [LinearGradient; 4] = [
    LinearGradient {
        id: "paint0_animated",
        start: Vec2::new(53.1933, 43.4491),
        end: Vec2::new(93.0427, 96.3667),
        stops: [stop(0.0, "#FF00F5", 0.3), stop(1.0, "#6C5FFE", 0.0)],
    },
    LinearGradient {
        id: "paint1_animated",
        start: Vec2::new(46.4643, 30.6569),
        end: Vec2::new(103.14, 105.919),
        stops: [stop(0.0, "#13B5D2", 0.3), stop(1.0, "#6C5FFE", 0.0)],
    },
    LinearGradient {
        id: "paint2_animated",
        start: Vec2::new(94.3856, 68.4078),
        end: Vec2::new(94.3856, 128.433),
        stops: [stop(0.0, "#FFF500", 0.25), stop(1.0, "#9CFFED", 0.0)],
    },
    LinearGradient {
        id: "paint3_animated",
        start: Vec2::new(78.4552, 70.3488),
        end: Vec2::new(149.32, 110.802),
        stops: [stop(0.0, "#30D5C8", 0.3), stop(1.0, "#9CFFED", 0.0)],
    },
];

/// Fill of the ring outline: transparent center fading to white at the rim
pub static OUTLINE_GRADIENT: RadialGradient = RadialGradient {
    id: "paint4_radial",
    center: ICON_CENTER,
    scale: Vec2::new(51.5578, 51.3198),
    rotate_deg: 90.0,
    stops: [stop(0.7, "white", 0.0), stop(1.0, "white", 1.0)],
};

/// Background blobs in draw order
pub static BLOBS: [Blob; 4] = [
    Blob {
        path: "M117.904 67.8441C117.904 83.5909 91.3807 105.36 75.7066 105.36C60.0326 105.36 33.8828 93.9077 33.8828 78.1609C33.8828 62.4142 55.9248 34.8301 71.5989 34.8301C87.273 34.8301 117.904 52.0973 117.904 67.8441Z",
        gradient_id: "paint0_linear",
        filter_id: "filter0_f",
    },
    Blob {
        path: "M138.499 65.3525C138.499 87.7484 100.776 118.709 78.4839 118.709C56.1914 118.709 19 102.422 19 80.0257C19 57.6298 50.3492 18.3984 72.6417 18.3984C94.9341 18.3984 138.499 42.9567 138.499 65.3525Z",
        gradient_id: "paint1_linear",
        filter_id: "filter1_f",
    },
    Blob {
        path: "M137.516 88.1037C137.516 104.679 107.524 126.37 91.0248 126.37C74.5257 126.37 48.0807 121.374 48.0807 104.798C48.0807 88.2227 45.025 62.4053 61.524 62.4053C78.023 62.4053 137.516 71.5281 137.516 88.1037Z",
        gradient_id: "paint2_linear",
        filter_id: "filter2_f",
    },
    Blob {
        path: "M130.925 32.4395C150.45 43.6885 155.644 94.0653 144.447 113.68C133.25 133.295 109.419 161.343 89.8944 150.094C70.3702 138.845 37.8864 124.957 49.0834 105.342C60.2804 85.7276 111.401 21.1905 130.925 32.4395Z",
        gradient_id: "paint3_linear",
        filter_id: "filter3_f",
    },
];

/// Ring outline around the bars
pub static RING_OUTLINE: Outline = Outline {
    path: "M83.2314 27.8916C111.023 27.8916 133.56 50.5268 133.561 78.458C133.561 106.389 111.023 129.024 83.2314 129.024C55.4404 129.024 32.9033 106.389 32.9033 78.458C32.9034 50.5269 55.4405 27.8918 83.2314 27.8916Z",
    gradient_id: "paint4_radial",
    stroke: FOREGROUND,
    stroke_width: 1.98299,
};
