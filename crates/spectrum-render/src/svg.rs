//! SVG serialization.
//!
//! The icon is written in view box units; the outer `width`/`height` scale it
//! to the configured size. Draw order follows the scene.

use spectrum_core::artwork::{
    BlurFilter, LinearGradient, RadialGradient, BLOB_GRADIENTS, FILTERS, OUTLINE_GRADIENT,
    VIEW_BOX_HEIGHT, VIEW_BOX_WIDTH, WAVE_GRADIENTS,
};
use spectrum_core::{BarRect, Element, Scene};
use std::fmt::Write;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Screen the icon is placed on
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// CSS background color
    pub background: String,
}

impl Canvas {
    /// Top-left corner that centers `scene` on this canvas
    pub fn placement(&self, scene: &Scene) -> (f32, f32) {
        (
            (self.width as f32 - scene.width) / 2.0,
            (self.height as f32 - scene.height) / 2.0,
        )
    }
}

/// Standalone SVG document of the icon
pub fn to_svg(scene: &Scene) -> String {
    let mut out = String::with_capacity(16 * 1024);
    write_icon(&mut out, scene, None);
    out
}

/// SVG document of the icon centered on a filled canvas
pub fn to_svg_on_canvas(scene: &Scene, canvas: &Canvas) -> String {
    let mut out = String::with_capacity(16 * 1024);
    let _ = write!(
        out,
        r#"<svg xmlns="{}" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        SVG_NS, canvas.width, canvas.height, canvas.width, canvas.height
    );
    let _ = write!(
        out,
        r#"<rect width="{}" height="{}" fill="{}"/>"#,
        canvas.width, canvas.height, canvas.background
    );
    write_icon(&mut out, scene, Some(canvas.placement(scene)));
    out.push_str("</svg>");
    out
}

fn write_icon(out: &mut String, scene: &Scene, origin: Option<(f32, f32)>) {
    out.push_str("<svg");
    if origin.is_none() {
        let _ = write!(out, r#" xmlns="{}""#, SVG_NS);
    }
    if let Some((x, y)) = origin {
        let _ = write!(out, r#" x="{}" y="{}""#, x, y);
    }
    let _ = write!(
        out,
        r#" width="{}" height="{}" viewBox="0 0 {} {}" fill="none">"#,
        scene.width, scene.height, VIEW_BOX_WIDTH, VIEW_BOX_HEIGHT
    );

    write_defs(out, scene);
    for element in &scene.elements {
        write_element(out, element);
    }
    out.push_str("</svg>");
}

fn write_defs(out: &mut String, scene: &Scene) {
    out.push_str("<defs>");
    for filter in &FILTERS {
        write_filter(out, filter);
    }
    for gradient in &BLOB_GRADIENTS {
        write_linear_gradient(out, gradient);
    }
    if scene.wave_count() > 0 {
        for gradient in &WAVE_GRADIENTS {
            write_linear_gradient(out, gradient);
        }
    }
    write_radial_gradient(out, &OUTLINE_GRADIENT);
    out.push_str("</defs>");
}

fn write_filter(out: &mut String, filter: &BlurFilter) {
    let _ = write!(
        out,
        concat!(
            r#"<filter id="{}" x="-50%" y="-50%" width="200%" height="200%" "#,
            r#"filterUnits="objectBoundingBox" color-interpolation-filters="sRGB">"#,
            r#"<feFlood flood-opacity="0" result="BackgroundImageFix"/>"#,
            r#"<feBlend mode="normal" in="SourceGraphic" in2="BackgroundImageFix" result="shape"/>"#,
            r#"<feGaussianBlur stdDeviation="{}" result="foregroundBlur"/>"#,
            "</filter>"
        ),
        filter.id, filter.std_deviation
    );
}

fn write_linear_gradient(out: &mut String, gradient: &LinearGradient) {
    let _ = write!(
        out,
        r#"<linearGradient id="{}" x1="{}" y1="{}" x2="{}" y2="{}" gradientUnits="userSpaceOnUse">"#,
        gradient.id, gradient.start.x, gradient.start.y, gradient.end.x, gradient.end.y
    );
    for stop in &gradient.stops {
        write_stop(out, stop.offset, stop.color, stop.opacity);
    }
    out.push_str("</linearGradient>");
}

fn write_radial_gradient(out: &mut String, gradient: &RadialGradient) {
    let _ = write!(
        out,
        concat!(
            r#"<radialGradient id="{}" cx="0" cy="0" r="1" gradientUnits="userSpaceOnUse" "#,
            r#"gradientTransform="translate({} {}) rotate({}) scale({} {})">"#
        ),
        gradient.id,
        gradient.center.x,
        gradient.center.y,
        gradient.rotate_deg,
        gradient.scale.x,
        gradient.scale.y
    );
    for stop in &gradient.stops {
        write_stop(out, stop.offset, stop.color, stop.opacity);
    }
    out.push_str("</radialGradient>");
}

fn write_stop(out: &mut String, offset: f32, color: &str, opacity: f32) {
    let _ = write!(out, r#"<stop offset="{}" stop-color="{}""#, offset, color);
    if opacity < 1.0 {
        let _ = write!(out, r#" stop-opacity="{}""#, opacity);
    }
    out.push_str("/>");
}

fn write_bar(out: &mut String, rect: &BarRect) {
    let _ = write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}"/>"#,
        rect.x, rect.y, rect.width, rect.height, rect.corner_radius, rect.fill
    );
}

fn write_element(out: &mut String, element: &Element) {
    match element {
        Element::Blob(blob) => {
            let _ = write!(
                out,
                r#"<g filter="url(#{})"><path d="{}" fill="url(#{})"/></g>"#,
                blob.filter_id, blob.path, blob.gradient_id
            );
        }
        Element::Wave {
            curve,
            gradient_id,
            filter_id,
        } => {
            let _ = write!(
                out,
                r#"<path d="{}" fill="url(#{})" filter="url(#{})"/>"#,
                curve.path_data(),
                gradient_id,
                filter_id
            );
        }
        Element::StaticBar(rect) | Element::AnimatedBar(rect) => write_bar(out, rect),
        Element::Outline(outline) => {
            let _ = write!(
                out,
                r#"<path d="{}" fill="url(#{})" stroke="{}" stroke-width="{}"/>"#,
                outline.path, outline.gradient_id, outline.stroke, outline.stroke_width
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectrum_core::{FrameClock, IconConfig, SpectrumIcon};

    fn static_scene(size: f32) -> Scene {
        let mut clock = FrameClock::new();
        SpectrumIcon::mount_seeded(
            IconConfig {
                size,
                animated: false,
            },
            &mut clock,
            0,
        )
        .frame(&mut clock)
    }

    #[test]
    fn test_root_attributes() {
        let svg = to_svg(&static_scene(176.0));
        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="176" height="171" viewBox="0 0 176 171" fill="none">"#
        ));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_static_icon_has_no_wave_gradients() {
        let svg = to_svg(&static_scene(120.0));
        assert!(svg.contains(r#"id="paint0_linear""#));
        assert!(!svg.contains("paint0_animated"));
        assert_eq!(svg.matches("<rect").count(), 9);
        assert_eq!(svg.matches("<filter ").count(), 4);
    }

    #[test]
    fn test_outline_gradient_transform() {
        let svg = to_svg(&static_scene(176.0));
        assert!(svg.contains(
            r#"gradientTransform="translate(83.2319 78.4582) rotate(90) scale(51.5578 51.3198)""#
        ));
        assert!(svg.contains(r#"stroke-width="1.98299""#));
    }

    #[test]
    fn test_canvas_centers_icon() {
        let scene = static_scene(176.0);
        let canvas = Canvas {
            width: 376,
            height: 371,
            background: "#fff".to_string(),
        };
        assert_eq!(canvas.placement(&scene), (100.0, 100.0));

        let svg = to_svg_on_canvas(&scene, &canvas);
        assert!(svg.contains(r##"<rect width="376" height="371" fill="#fff"/>"##));
        assert!(svg.contains(r#"<svg x="100" y="100" width="176""#));
        assert_eq!(svg.matches("xmlns").count(), 1);
    }
}
