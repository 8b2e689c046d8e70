use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use partition_zk::crypto::zkp::{HashChallenge, ZkMerkleTree};
use partition_zk::{PartitionEngine, Proof, ProverConfig, VerifierConfig};
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use std::time::Duration;

/// 64 ones followed by 32 twos, balanced by negating every two.
fn build_instance() -> (Vec<i64>, Vec<i64>) {
    let mut problem = vec![1i64; 64];
    problem.extend(std::iter::repeat(2).take(32));
    let assignment = problem.iter().map(|&num| if num == 1 { 1 } else { -1 }).collect();
    (problem, assignment)
}

fn prove(problem: &[i64], assignment: &[i64], queries: usize) -> Proof {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5EED);
    PartitionEngine::new()
        .prove_with_rng(problem, assignment, ProverConfig::new(queries), &mut rng)
        .expect("prove")
}

fn bench_tree_build(c: &mut Criterion) {
    let values: Vec<i64> = (0..97).collect();
    c.bench_function("merkle/zk_build_97", |b| {
        b.iter_batched(
            || ChaCha20Rng::seed_from_u64(1),
            |mut rng| black_box(ZkMerkleTree::build(&values, &mut rng)),
            BatchSize::SmallInput,
        );
    });
}

fn bench_prove(c: &mut Criterion) {
    let (problem, assignment) = build_instance();
    c.bench_function("engine/prove_64_queries", |b| {
        b.iter(|| black_box(prove(&problem, &assignment, 64)));
    });

    let engine = PartitionEngine::with_deriver(HashChallenge);
    c.bench_function("engine/prove_64_queries_hash_challenge", |b| {
        b.iter_batched(
            || ChaCha20Rng::seed_from_u64(2),
            |mut rng| {
                let proof = engine
                    .prove_with_rng(&problem, &assignment, ProverConfig::new(64), &mut rng)
                    .expect("prove");
                black_box(proof)
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_verify(c: &mut Criterion) {
    let (problem, assignment) = build_instance();
    let proof = prove(&problem, &assignment, 64);
    let engine = PartitionEngine::new();
    c.bench_function("engine/verify_64_queries", |b| {
        b.iter(|| {
            let ok = engine.verify(&problem, &proof, VerifierConfig::default());
            black_box(ok);
        });
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(3))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_tree_build, bench_prove, bench_verify
}
criterion_main!(benches);
