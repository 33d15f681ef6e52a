//! Example of implementing a custom hasher for the allow-list Merkle tree
//!
//! This example demonstrates:
//! - Creating a custom hasher implementation
//! - Using it with the tree
//! - Basic tree operations with the custom hasher

use allowlist_merkle::{Hasher, KeccakMerkleTree, MerkleTree};
use sha2::{Digest, Sha256};

// Custom hasher that uses SHA256 but adds a prefix to the input
#[derive(Clone)]
struct PrefixedSha256;

impl Hasher<32> for PrefixedSha256 {
    fn hash(data: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        // Add a custom prefix to the input
        hasher.update(b"custom_prefix:");
        hasher.update(data);
        hasher.finalize().into()
    }
}

fn main() {
    let leaves = [b"alice", b"carol", b"dave_"];

    // Create a new tree with our custom hasher
    let tree = MerkleTree::<32, PrefixedSha256>::new(&leaves).unwrap();
    println!("Root hash with custom hasher: {}", hex::encode(tree.root()));

    let proof = tree.proof(1).unwrap();
    println!("Proof for carol verifies: {}", tree.verify(&proof, b"carol"));

    // Compare with the standard Keccak-256 tree
    let standard_tree = KeccakMerkleTree::new(&leaves).unwrap();
    println!(
        "Root hash with standard Keccak-256: {}",
        hex::encode(standard_tree.root())
    );

    // Note that the hashes are different due to our custom hasher
    println!("\nThe hashes are different because the trees use different hash functions.");
}
