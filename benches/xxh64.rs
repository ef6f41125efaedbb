use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use xxh64_fingerprint::{hash_bytes, hash_long, hash_u64_batch, hash_words};

fn bench_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_bytes");
    for len in [8usize, 31, 64, 1024, 64 * 1024] {
        let bytes: Vec<u8> = (0..len).map(|i| (i * 31) as u8).collect();
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("general", len), &bytes, |b, bytes| {
            b.iter(|| hash_bytes(black_box(bytes), 42))
        });
        if len % 8 == 0 {
            group.bench_with_input(BenchmarkId::new("words", len), &bytes, |b, bytes| {
                b.iter(|| hash_words(black_box(bytes), 42))
            });
        }
    }
    group.finish();
}

fn bench_scalars(c: &mut Criterion) {
    c.bench_function("hash_long", |b| {
        let mut x = 0u64;
        b.iter(|| {
            x = x.wrapping_add(1);
            hash_long(black_box(x), 42)
        })
    });

    let keys: Vec<u64> = (0..4096u64).map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15)).collect();
    let mut out = vec![0u64; keys.len()];
    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(keys.len() as u64));
    group.bench_function("hash_u64_batch", |b| {
        b.iter(|| hash_u64_batch(black_box(&keys), 42, &mut out))
    });
    group.finish();
}

criterion_group!(benches, bench_bytes, bench_scalars);
criterion_main!(benches);
