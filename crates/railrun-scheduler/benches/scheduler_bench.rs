//! Benchmarks for frame-to-step conversion.

use criterion::{Criterion, criterion_group, criterion_main};
use railrun_scheduler::{FixedStepScheduler, SchedulerConfig};
use std::hint::black_box;

fn bench_frame_60hz(c: &mut Criterion) {
    let mut scheduler = FixedStepScheduler::new(SchedulerConfig::default());
    scheduler.start();
    let mut timestamp = 0.0;
    scheduler.frame(timestamp, |_| {});

    c.bench_function("frame_60hz", |b| {
        b.iter(|| {
            timestamp += 1.0 / 60.0;
            let mut sum = 0.0;
            let report = scheduler.frame(black_box(timestamp), |h| sum += h);
            black_box((report, sum))
        })
    });
}

fn bench_frame_stall(c: &mut Criterion) {
    c.bench_function("frame_clamped_stall", |b| {
        b.iter(|| {
            let mut scheduler = FixedStepScheduler::new(SchedulerConfig::default());
            scheduler.start();
            scheduler.frame(0.0, |_| {});
            let report = scheduler.frame(black_box(10.0), |h| {
                black_box(h);
            });
            black_box(report)
        })
    });
}

criterion_group!(benches, bench_frame_60hz, bench_frame_stall);
criterion_main!(benches);
