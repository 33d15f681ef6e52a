//! Merkle trees for allow-lists
//!
//! This crate builds Merkle trees over ordered lists of raw byte-string leaves (for
//! example the addresses of an allow-list) so that membership can be proven without
//! revealing the whole list.
//!
//! The tree supports:
//! - Keccak-256 leaves and nodes, or any other [`Hasher`]
//! - Order independent pair hashing: siblings are sorted before being hashed, so
//!   proofs carry no left/right bits
//! - Odd levels carry their last node up unchanged
//! - Single and batch inclusion proofs, batch proofs computed in parallel with the
//!   `multi-thread` feature
//!
//! ```
//! use allowlist_merkle::{verify_merkle_proof, Keccak256, KeccakMerkleTree};
//!
//! let leaves = [b"a", b"b", b"c"];
//! let tree = KeccakMerkleTree::new(&leaves).unwrap();
//! let proof = tree.proof(1).unwrap();
//! assert!(verify_merkle_proof::<32, Keccak256>(&tree.root(), &proof, b"b"));
//! assert_eq!(tree.index(b"z"), None);
//! ```

mod config;
mod error;
mod hasher;
mod proof;
mod tree;

pub use config::{
    TreeConfig, DEFAULT_PARALLELIZATION_CUTOFF, MIN_PARALLELIZATION_CUTOFF, PAR_CUTOFF_ENV,
};
pub use error::TreeError;
pub use hasher::{hash_pair, Hasher, Keccak256};
pub use proof::{verify_merkle_proof, Proof};
pub use tree::{KeccakMerkleTree, MerkleTree};

#[cfg(test)]
mod tests;
