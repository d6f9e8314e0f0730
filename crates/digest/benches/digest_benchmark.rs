//! crates/digest/benches/digest_benchmark.rs
//!
//! Benchmarks for SHA-1 digest throughput.
//!
//! Run with: `cargo bench -p sha1-digest`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::Rng;

use sha1_digest::digest;

/// Generate random data of the specified size.
fn generate_random_data(size: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let mut data = vec![0u8; size];
    rng.fill(&mut data[..]);
    data
}

/// Benchmark one-shot digest computation for different message sizes.
fn bench_digest(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha1_digest");

    for size in [64, 512, 4096, 65536, 1 << 20] {
        let data = generate_random_data(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("digest", size), &data, |b, data| {
            b.iter(|| {
                black_box(digest(black_box(data)).expect("in-memory messages always hash"))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_digest);
criterion_main!(benches);
