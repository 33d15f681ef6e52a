use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use allowlist_merkle::{KeccakMerkleTree, TreeConfig};

pub fn generate_random_address() -> [u8; 20] {
    let mut address = [0u8; 20];
    for byte in address.iter_mut() {
        *byte = rand::random();
    }
    address
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("Tree Construction");

    for size in [1_000usize, 50_000] {
        let leaves: Vec<[u8; 20]> = (0..size).map(|_| generate_random_address()).collect();

        group.bench_with_input(BenchmarkId::new("Sequential", size), &leaves, |b, leaves| {
            b.iter(|| {
                black_box(KeccakMerkleTree::with_config(leaves, TreeConfig::sequential()))
                    .unwrap();
            })
        });

        group.bench_with_input(BenchmarkId::new("Default", size), &leaves, |b, leaves| {
            b.iter(|| {
                black_box(KeccakMerkleTree::new(leaves)).unwrap();
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_construction);
criterion_main!(benches);
