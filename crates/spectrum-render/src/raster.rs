//! Rasterization and PNG output.

use crate::{RenderError, Result};
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use resvg::tiny_skia::{self, Transform};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Premultiplied RGBA raster
pub use resvg::tiny_skia::Pixmap;

/// Parse an SVG document and render it at its intrinsic size
pub fn rasterize(svg: &str) -> Result<Pixmap> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_data(svg.as_bytes(), &options)?;
    let size = tree.size();
    let width = size.width().round() as u32;
    let height = size.height().round() as u32;

    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(RenderError::PixmapAllocation { width, height })?;
    resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());
    Ok(pixmap)
}

/// Encode a pixmap as PNG (straight alpha)
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>> {
    let rgba: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();

    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(
        &rgba,
        pixmap.width(),
        pixmap.height(),
        ColorType::Rgba8,
    )?;
    Ok(png)
}

/// Write a pixmap to `path` as PNG, creating parent directories
pub fn save_png(pixmap: &Pixmap, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, encode_png(pixmap)?)?;
    debug!(
        "Wrote {}x{} PNG to {:?}",
        pixmap.width(),
        pixmap.height(),
        path
    );
    Ok(())
}
