//! Curve Evaluation Benchmarks

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use oxtrc_core::{Curve, ParametricCurve, SampledCurve, apply_rgb, apply_rgb8, evaluate};

fn generate_table(size: usize) -> Vec<f32> {
    // sRGB-like gamma curve as table
    (0..size)
        .map(|i| {
            let x = i as f32 / (size - 1) as f32;
            if x <= 0.04045 {
                x / 12.92
            } else {
                ((x + 0.055) / 1.055).powf(2.4)
            }
        })
        .collect()
}

fn generate_pixels(count: usize) -> Vec<[f32; 3]> {
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            [t, (t * 2.0) % 1.0, (t * 3.0) % 1.0]
        })
        .collect()
}

fn curves() -> Vec<(&'static str, Curve)> {
    vec![
        ("gamma", Curve::gamma(2.2)),
        ("table_4096", Curve::Sampled(SampledCurve::Table(generate_table(4096)))),
        ("parametric_srgb", Curve::Parametric(ParametricCurve::srgb())),
    ]
}

fn bench_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_single");

    for (name, curve) in curves() {
        group.bench_function(BenchmarkId::new("forward", name), |b| {
            b.iter(|| evaluate(black_box(&curve), false, black_box(0.5)))
        });
        group.bench_function(BenchmarkId::new("inverse", name), |b| {
            b.iter(|| evaluate(black_box(&curve), true, black_box(0.2)))
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_rgb");
    let curves = [
        Curve::Parametric(ParametricCurve::srgb()),
        Curve::Parametric(ParametricCurve::srgb()),
        Curve::Parametric(ParametricCurve::srgb()),
    ];

    for count in [1_000usize, 100_000] {
        group.throughput(Throughput::Elements(count as u64));
        let pixels = generate_pixels(count);

        group.bench_with_input(BenchmarkId::new("apply_rgb", count), &pixels, |b, pixels| {
            b.iter_batched_ref(
                || pixels.clone(),
                |buf| apply_rgb(&curves, false, buf),
                criterion::BatchSize::LargeInput,
            )
        });

        #[cfg(feature = "parallel")]
        group.bench_with_input(BenchmarkId::new("apply_rgb_par", count), &pixels, |b, pixels| {
            b.iter_batched_ref(
                || pixels.clone(),
                |buf| oxtrc_core::apply_rgb_par(&curves, false, buf),
                criterion::BatchSize::LargeInput,
            )
        });

        let src: Vec<u8> = (0..count * 3).map(|i| ((i * 37) % 256) as u8).collect();
        let mut dst = vec![0u8; src.len()];
        group.bench_function(BenchmarkId::new("apply_rgb8", count), |b| {
            b.iter(|| apply_rgb8(&curves, false, black_box(&src), &mut dst))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single, bench_batch);
criterion_main!(benches);
