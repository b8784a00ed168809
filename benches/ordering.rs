//! Performance benchmarks for slide ordering.
//!
//! Run with: `cargo bench --bench ordering`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use slideshow_kernel::{order_slides, Photo, Slide, SlideId, Solver, SolverPolicy};

/// Deterministic pseudo-random tag list.
fn tags_for(seed: u64, count: usize, vocabulary: u64) -> Vec<String> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..count)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            format!("tag{}", (state >> 33) % vocabulary)
        })
        .collect()
}

fn make_bucket(size: usize, tag_count: usize) -> Vec<Slide> {
    (0..size as u32)
        .map(|i| {
            let photo = Photo::horizontal(i, tags_for(u64::from(i), tag_count, 500));
            Slide::single(SlideId::new(i), &photo)
        })
        .collect()
}

fn make_photos(n: u32) -> Vec<Photo> {
    (0..n)
        .map(|i| {
            let tags = tags_for(u64::from(i), (i % 12 + 1) as usize, 2_000);
            if i % 3 == 0 {
                Photo::vertical(i, tags)
            } else {
                Photo::horizontal(i, tags)
            }
        })
        .collect()
}

/// Benchmark ordering a single bucket.
fn bench_bucket(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_bucket");

    for size in [100usize, 1_000, 10_000] {
        let slides = make_bucket(size, 10);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &slides, |b, slides| {
            b.iter(|| order_slides(black_box(slides.clone())))
        });
    }

    group.finish();
}

/// Benchmark the full pipeline, sequential vs parallel.
fn bench_pipeline(c: &mut Criterion) {
    let photos = make_photos(20_000);
    let mut group = c.benchmark_group("solve");
    group.throughput(Throughput::Elements(photos.len() as u64));

    let sequential = Solver::new(SolverPolicy::sequential());
    group.bench_function("sequential", |b| b.iter(|| sequential.solve(black_box(&photos))));

    let parallel = Solver::new(SolverPolicy::default());
    group.bench_function("parallel", |b| b.iter(|| parallel.solve(black_box(&photos))));

    group.finish();
}

criterion_group!(benches, bench_bucket, bench_pipeline);
criterion_main!(benches);
