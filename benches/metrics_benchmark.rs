use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wanderlog::models::RawTrackPoint;
use wanderlog::services::track::{calculate_metrics, normalize_track};

/// Build a synthetic alpine track: a long out-and-back with elevation and
/// per-point timestamps, roughly one point every 10 seconds.
fn synthetic_track(points: usize) -> Vec<RawTrackPoint> {
    let start = Utc.with_ymd_and_hms(2025, 7, 1, 8, 0, 0).unwrap();
    (0..points)
        .map(|i| {
            let f = i as f64;
            RawTrackPoint {
                lat: 47.0 + 0.0001 * f,
                lon: 11.0 + 0.00005 * (f * 0.7).sin(),
                ele: Some(900.0 + 120.0 * (f * 0.01).sin()),
                time: Some(start + Duration::seconds(10 * i as i64)),
            }
        })
        .collect()
}

fn benchmark_track_pipeline(c: &mut Criterion) {
    let raw = synthetic_track(10_000);
    let normalized = normalize_track(raw.clone()).expect("valid track");

    let mut group = c.benchmark_group("track_pipeline");

    group.bench_function("normalize_10k_points", |b| {
        b.iter(|| normalize_track(black_box(raw.clone())))
    });

    group.bench_function("calculate_metrics_10k_points", |b| {
        b.iter(|| calculate_metrics(black_box(&normalized)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_track_pipeline);
criterion_main!(benches);
