use spectrum_core::{Element, FrameClock, IconConfig, Scheduler, SpectrumIcon, BARS, RINGS};

fn round2(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

#[test]
fn test_static_icon_matches_artwork() {
    let mut clock = FrameClock::new();
    let icon = SpectrumIcon::mount_seeded(
        IconConfig {
            size: 120.0,
            animated: false,
        },
        &mut clock,
        7,
    );
    let scene = icon.frame(&mut clock);

    assert_eq!(scene.blob_count(), 4);
    assert_eq!(scene.wave_count(), 0);
    assert_eq!(scene.outline_count(), 1);
    assert_eq!(scene.static_bar_count(), 9);
    assert_eq!(scene.animated_bar_count(), 0);

    let heights: Vec<f32> = scene.bars().iter().map(|b| round2(b.height)).collect();
    assert_eq!(
        heights,
        vec![7.33, 21.98, 5.50, 29.31, 14.66, 9.16, 16.49, 5.50, 21.98]
    );

    // Nothing is ever scheduled for a static icon
    assert_eq!(clock.stats().scalars_allocated, 0);
    assert_eq!(clock.stats().timers_scheduled, 0);
    assert_eq!(clock.active_timers(), 0);
}

#[test]
fn test_static_frames_are_identical() {
    let mut clock = FrameClock::new();
    let icon = SpectrumIcon::mount_seeded(IconConfig::default(), &mut clock, 1);
    let first = icon.frame(&mut clock);
    clock.advance(5000.0);
    assert_eq!(icon.frame(&mut clock), first);
}

#[test]
fn test_static_scene_scale() {
    let mut clock = FrameClock::new();
    let icon = SpectrumIcon::mount_seeded(
        IconConfig {
            size: 88.0,
            animated: false,
        },
        &mut clock,
        0,
    );
    let scene = icon.frame(&mut clock);
    assert_eq!(scene.scale(), 0.5);
    assert_eq!(scene.height, 85.5);
}

#[test]
fn test_animated_icon_mounts_all_animators() {
    let mut clock = FrameClock::new();
    let icon = SpectrumIcon::mount_seeded(
        IconConfig {
            size: 120.0,
            animated: true,
        },
        &mut clock,
        99,
    );

    assert_eq!(icon.rings().len(), RINGS.len());
    assert_eq!(icon.bars().len(), BARS.len());
    // Two scalars per ring, one per bar
    assert_eq!(clock.live_scalars(), 4 * 2 + 9);
    assert_eq!(clock.active_timers(), 4 * 2 + 9);
    assert_eq!(clock.pending_continuations(), 9);

    let scene = icon.frame(&mut clock);
    assert_eq!(scene.blob_count(), 4);
    assert_eq!(scene.wave_count(), 4);
    assert_eq!(scene.animated_bar_count(), 9);
    assert_eq!(scene.outline_count(), 1);
}

#[test]
fn test_waves_follow_ring_order() {
    let mut clock = FrameClock::new();
    let icon = SpectrumIcon::mount_seeded(
        IconConfig {
            size: 176.0,
            animated: true,
        },
        &mut clock,
        3,
    );
    clock.advance(250.0);
    let scene = icon.frame(&mut clock);

    let gradients: Vec<&str> = scene
        .elements
        .iter()
        .filter_map(|e| match e {
            Element::Wave { gradient_id, .. } => Some(*gradient_id),
            _ => None,
        })
        .collect();
    let expected: Vec<&str> = RINGS.iter().map(|r| r.gradient_id).collect();
    assert_eq!(gradients, expected);
}

#[test]
fn test_unmount_immediately_after_mount() {
    let mut clock = FrameClock::new();
    let icon = SpectrumIcon::mount_seeded(
        IconConfig {
            size: 120.0,
            animated: true,
        },
        &mut clock,
        5,
    );
    icon.unmount(&mut clock);

    assert_eq!(clock.pending_continuations(), 0);
    assert_eq!(clock.live_scalars(), 0);
    assert_eq!(clock.active_timers(), 0);

    clock.advance(10_000.0);
    assert_eq!(clock.stats().completions_run, 0);
}

#[test]
fn test_unmount_mid_animation() {
    let mut clock = FrameClock::new();
    let icon = SpectrumIcon::mount_seeded(
        IconConfig {
            size: 120.0,
            animated: true,
        },
        &mut clock,
        8,
    );
    for _ in 0..120 {
        clock.advance(1000.0 / 60.0);
    }
    let scheduled = clock.stats().timers_scheduled;
    assert!(scheduled > 17);

    icon.unmount(&mut clock);
    clock.advance(1000.0);
    assert_eq!(clock.stats().timers_scheduled, scheduled);
    assert_eq!(clock.live_scalars(), 0);
}

#[test]
fn test_same_seed_same_frames() {
    let config = IconConfig {
        size: 120.0,
        animated: true,
    };
    let mut a = FrameClock::new();
    let mut b = FrameClock::new();
    let icon_a = SpectrumIcon::mount_seeded(config, &mut a, 1234);
    let icon_b = SpectrumIcon::mount_seeded(config, &mut b, 1234);

    for _ in 0..90 {
        a.advance(16.0);
        b.advance(16.0);
    }
    assert_eq!(icon_a.frame(&mut a), icon_b.frame(&mut b));
    assert_eq!(a.now(), b.now());
}

#[test]
fn test_random_mount_is_animated() {
    let mut clock = FrameClock::new();
    let icon = SpectrumIcon::mount(
        IconConfig {
            size: 64.0,
            animated: true,
        },
        &mut clock,
    );
    assert_eq!(icon.bars().len(), 9);
    icon.unmount(&mut clock);
}
