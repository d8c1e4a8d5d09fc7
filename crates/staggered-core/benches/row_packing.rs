use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use staggered_core::prelude::*;

fn generate_boxes(count: usize, min_size: u32, max_size: u32) -> Vec<BoxSize> {
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    (0..count)
        .map(|_| {
            let w = rng.gen_range(min_size..=max_size);
            let h = rng.gen_range(min_size..=max_size);
            BoxSize::new(w, h)
        })
        .collect()
}

fn bench_row_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("staggered_rows");

    for count in [100usize, 1_000, 10_000] {
        let boxes = generate_boxes(count, 8, 128);
        group.throughput(Throughput::Elements(count as u64));

        for rows in [1usize, 3, 16] {
            group.bench_with_input(
                BenchmarkId::new(format!("rows_{rows}"), count),
                &boxes,
                |b, boxes| {
                    let cfg = PackerConfig::builder()
                        .rows(rows)
                        .with_max_dimensions(4096, 4096)
                        .build();
                    b.iter(|| black_box(pack_with_config(boxes, &cfg)))
                },
            );
        }
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("staggered_batch");
    let batches: Vec<Vec<BoxSize>> = (0..64).map(|_| generate_boxes(500, 8, 64)).collect();
    group.throughput(Throughput::Elements(batches.len() as u64));

    for parallel in [false, true] {
        group.bench_with_input(
            BenchmarkId::new("parallel", parallel),
            &batches,
            |b, batches| {
                let cfg = PackerConfig::builder().rows(3).parallel(parallel).build();
                b.iter(|| black_box(pack_batch(batches, &cfg)))
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_row_counts, bench_batch);
criterion_main!(benches);
