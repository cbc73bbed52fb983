//! Spectrum Render - SVG and PNG Output
//!
//! Turns a [`spectrum_core::Scene`] into an SVG document and rasterizes it:
//! - SVG serialization of the icon, alone or centered on a canvas
//! - Rasterization through resvg
//! - PNG encoding

use thiserror::Error;

pub mod raster;
pub mod svg;

pub use raster::{encode_png, rasterize, save_png, Pixmap};
pub use svg::{to_svg, to_svg_on_canvas, Canvas};

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// The generated SVG could not be parsed
    #[error("SVG parse failed: {0}")]
    Svg(#[from] usvg::Error),

    /// Zero-sized or oversized target
    #[error("Cannot allocate {width}x{height} pixmap")]
    PixmapAllocation {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// Writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;
