use std::fs;
use std::path::PathBuf;
mod types;
use crate::{tests::allowlist::types::TestVectors, KeccakMerkleTree, TreeConfig};

fn run_test_vectors(test_vectors: &TestVectors, config: TreeConfig) {
    assert_eq!(test_vectors.hash, "keccak256");
    for case in &test_vectors.valid_test_cases {
        let comment = case.comment.as_deref().unwrap_or("unnamed test");
        println!("Running test case: {}", comment);

        let leaves = case.leaves_as_bytes().unwrap();
        let tree = KeccakMerkleTree::with_config(&leaves, config).unwrap();

        println!("root check");
        assert_eq!(tree.root(), case.root_as_bytes().unwrap(), "{}", comment);

        println!("proofs");
        let expected = case.to_proofs().unwrap();
        assert_eq!(tree.leaf_proofs(), expected, "{}", comment);
        for (i, (leaf, proof)) in leaves.iter().zip(expected.iter()).enumerate() {
            assert_eq!(&tree.proof(i).unwrap(), proof, "{}", comment);
            assert!(tree.verify(proof, leaf), "{}", comment);
            let first = leaves.iter().position(|l| l == leaf);
            assert_eq!(tree.index(leaf), first, "{}", comment);
        }

        println!("absent leaves");
        for leaf in case.absent_leaves_as_bytes().unwrap() {
            assert_eq!(tree.index(&leaf), None, "{}", comment);
            for proof in &expected {
                assert!(!tree.verify(proof, &leaf), "{}", comment);
            }
        }
    }
}

fn load_test_vectors() -> TestVectors {
    let path = PathBuf::from("src/tests/allowlist/testdata/merkle_trees.json");
    let json = fs::read_to_string(&path).unwrap();
    TestVectors::from_json(&json).unwrap()
}

#[test]
fn test_merkle_tree_vectors() {
    super::init_logger();
    run_test_vectors(&load_test_vectors(), TreeConfig::sequential());
}

#[test]
fn test_merkle_tree_vectors_parallel() {
    super::init_logger();
    run_test_vectors(&load_test_vectors(), TreeConfig::new(2));
}
