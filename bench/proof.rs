use criterion::{black_box, criterion_group, criterion_main, Criterion};
use allowlist_merkle::{verify_merkle_proof, Keccak256, KeccakMerkleTree, TreeConfig};

fn setup_leaves(num_leaves: usize) -> Vec<Vec<u8>> {
    (0..num_leaves)
        .map(|_| (0..20).map(|_| rand::random()).collect())
        .collect()
}

fn bench_proof_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Proof Generation");

    // Setup trees with 50000 leaves
    let leaves = setup_leaves(50_000);
    let sequential = KeccakMerkleTree::with_config(&leaves, TreeConfig::sequential()).unwrap();
    let parallel = KeccakMerkleTree::new(&leaves).unwrap();

    group.bench_function("Single Proofs", |b| {
        b.iter(|| {
            for i in 0..leaves.len() {
                black_box(sequential.proof(i)).unwrap();
            }
        })
    });

    group.bench_function("Leaf Proofs Sequential", |b| {
        b.iter(|| black_box(sequential.leaf_proofs()))
    });

    group.bench_function("Leaf Proofs Parallel", |b| {
        b.iter(|| black_box(parallel.leaf_proofs()))
    });

    group.finish();
}

fn bench_proof_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("Proof Verification");

    let leaves = setup_leaves(1_000);
    let tree = KeccakMerkleTree::new(&leaves).unwrap();
    let proofs = tree.leaf_proofs();
    let root = tree.root();

    group.bench_function("Verify All Leaves", |b| {
        b.iter(|| {
            for (leaf, proof) in leaves.iter().zip(proofs.iter()) {
                assert!(black_box(verify_merkle_proof::<32, Keccak256>(
                    &root, proof, leaf
                )));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_proof_generation, bench_proof_verification);
criterion_main!(benches);
