use spectrum_core::{FrameClock, IconConfig, SpectrumIcon};
use spectrum_render::{rasterize, save_png, to_svg, to_svg_on_canvas, Canvas};

fn mount(size: f32, animated: bool, clock: &mut FrameClock) -> SpectrumIcon {
    SpectrumIcon::mount_seeded(IconConfig { size, animated }, clock, 2024)
}

#[test]
fn test_static_icon_rasterizes_at_size() {
    let mut clock = FrameClock::new();
    let icon = mount(120.0, false, &mut clock);
    let pixmap = rasterize(&to_svg(&icon.frame(&mut clock))).unwrap();

    assert_eq!(pixmap.width(), 120);
    assert_eq!(pixmap.height(), 117);

    // Blobs glow behind the ring center
    let cx = (83.2319 / 176.0 * 120.0) as u32;
    let cy = (78.4582 / 171.0 * 117.0) as u32;
    assert!(pixmap.pixel(cx, cy).unwrap().alpha() > 0);
    // Corners only catch the far tail of the blur
    assert!(pixmap.pixel(0, 0).unwrap().alpha() < 16);
}

#[test]
fn test_animated_frames_differ() {
    let mut clock = FrameClock::new();
    let icon = mount(176.0, true, &mut clock);

    let first = to_svg(&icon.frame(&mut clock));
    for _ in 0..30 {
        clock.advance(1000.0 / 60.0);
    }
    let later = to_svg(&icon.frame(&mut clock));

    assert!(first.contains("paint1_animated"));
    assert_ne!(first, later);
    rasterize(&later).unwrap();
    icon.unmount(&mut clock);
}

#[test]
fn test_canvas_frame_to_png() {
    let mut clock = FrameClock::new();
    let icon = mount(120.0, true, &mut clock);
    let canvas = Canvas {
        width: 200,
        height: 300,
        background: "#ffffff".to_string(),
    };
    clock.advance(100.0);
    let pixmap = rasterize(&to_svg_on_canvas(&icon.frame(&mut clock), &canvas)).unwrap();
    assert_eq!((pixmap.width(), pixmap.height()), (200, 300));

    let corner = pixmap.pixel(0, 0).unwrap();
    assert_eq!(
        (corner.red(), corner.green(), corner.blue(), corner.alpha()),
        (255, 255, 255, 255)
    );

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frames").join("frame_0000.png");
    save_png(&pixmap, &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
}
