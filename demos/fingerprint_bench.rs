use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use xxh64_fingerprint::cpu::detect_features;
use xxh64_fingerprint::{
    hash_bytes, hash_bytes_batch_with, hash_u64_batch, hash_u64_batch_with, partition_for,
    BatchConfig, Fingerprint, XxHashSet,
};

const NUMERIC_KEYS: usize = 4_000_000;
const BYTE_KEYS: usize = 1_000_000;
const MIN_KEY_LEN: usize = 4;
const MAX_KEY_LEN: usize = 96;
const PARTITIONS: usize = 200;
const HASH_SEED: u64 = 42;
const GEN_SEED: u64 = 1337;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let features = detect_features();
    features.print_summary();
    let cfg = features.optimal_batch_config();

    let mut rng = StdRng::seed_from_u64(GEN_SEED);
    let numeric: Vec<u64> = (0..NUMERIC_KEYS).map(|_| rng.next_u64()).collect();
    let byte_keys = gen_byte_keys(BYTE_KEYS, &mut rng);

    println!("workload,keys,ms,ns_per_key");

    let mut out = vec![0u64; numeric.len()];
    let t0 = Instant::now();
    hash_u64_batch(&numeric, HASH_SEED, &mut out)?;
    report("u64_sequential", numeric.len(), t0);
    std::hint::black_box(&out);

    let t0 = Instant::now();
    hash_u64_batch_with(&numeric, HASH_SEED, &mut out, &cfg)?;
    report("u64_parallel", numeric.len(), t0);

    let t0 = Instant::now();
    let mut sink = 0u64;
    for k in &byte_keys {
        sink ^= hash_bytes(k, HASH_SEED);
    }
    report("bytes_sequential", byte_keys.len(), t0);
    std::hint::black_box(sink);

    let t0 = Instant::now();
    let byte_hashes = hash_bytes_batch_with(&byte_keys, HASH_SEED, &cfg);
    report("bytes_parallel", byte_keys.len(), t0);

    let distinct: XxHashSet<u64> = byte_hashes.iter().copied().collect();
    println!(
        "distinct_fingerprints,{},collisions,{}",
        distinct.len(),
        byte_keys.len() - distinct.len()
    );

    let mut buckets = vec![0usize; PARTITIONS];
    for k in &numeric {
        buckets[partition_for(k.fingerprint(HASH_SEED), PARTITIONS)?] += 1;
    }
    let expected = numeric.len() as f64 / PARTITIONS as f64;
    let worst = buckets
        .iter()
        .map(|&b| (b as f64 - expected).abs() / expected)
        .fold(0.0f64, f64::max);
    println!("partitions,{PARTITIONS},worst_skew_pct,{:.3}", worst * 100.0);

    let default_cfg = BatchConfig::default();
    println!(
        "batch_config,threshold,{},chunk,{}",
        default_cfg.parallel_threshold, default_cfg.chunk_size
    );

    Ok(())
}

fn report(name: &str, keys: usize, t0: Instant) {
    let secs = t0.elapsed().as_secs_f64();
    println!(
        "{name},{keys},{:.2},{:.2}",
        secs * 1000.0,
        secs * 1e9 / keys as f64
    );
}

fn gen_byte_keys(n: usize, rng: &mut StdRng) -> Vec<Vec<u8>> {
    (0..n)
        .map(|_| {
            let len = rng.gen_range(MIN_KEY_LEN..=MAX_KEY_LEN);
            let mut key = vec![0u8; len];
            rng.fill_bytes(&mut key);
            key
        })
        .collect()
}
