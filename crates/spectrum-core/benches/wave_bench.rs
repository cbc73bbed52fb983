use criterion::{criterion_group, criterion_main, Criterion};
use spectrum_core::{FrameClock, IconConfig, SpectrumIcon, RINGS};
use std::hint::black_box;

fn bench_wave_curves(c: &mut Criterion) {
    let mut group = c.benchmark_group("wave");

    group.bench_function("four_ring_curves", |b| {
        let shapes: Vec<_> = RINGS.iter().map(|r| (r.shape(), r.max_amplitude)).collect();
        let mut phase = 0.0f32;
        b.iter(|| {
            phase = (phase + 0.1) % std::f32::consts::TAU;
            for (shape, amplitude) in &shapes {
                black_box(shape.curve(*amplitude, phase));
            }
        });
    });

    group.bench_function("four_ring_path_data", |b| {
        let curves: Vec<_> = RINGS
            .iter()
            .map(|r| r.shape().curve(r.max_amplitude, 1.0))
            .collect();
        b.iter(|| {
            for curve in &curves {
                black_box(curve.path_data());
            }
        });
    });

    group.finish();
}

fn bench_animated_frame(c: &mut Criterion) {
    c.bench_function("animated_frame_60fps", |b| {
        let mut clock = FrameClock::new();
        let icon = SpectrumIcon::mount_seeded(
            IconConfig {
                size: 120.0,
                animated: true,
            },
            &mut clock,
            42,
        );
        b.iter(|| {
            clock.advance(1000.0 / 60.0);
            black_box(icon.frame(&mut clock));
        });
    });
}

criterion_group!(benches, bench_wave_curves, bench_animated_frame);
criterion_main!(benches);
