//! Merkle tree over an ordered list of leaves.

mod batch;
mod build;

use std::fmt::Display;
use std::marker::PhantomData;

use crate::{Hasher, Keccak256, Proof, TreeConfig, TreeError};

/// The tree used for allow-lists: Keccak-256 leaves and nodes.
pub type KeccakMerkleTree = MerkleTree<32, Keccak256>;

/// Merkle tree built once from an ordered list of leaves.
/// * `HASH_SIZE` - size of the hash digest in bytes.
/// * `H` - Hasher used for the leaves and the nodes.
///
/// Level 0 holds the leaf hashes in input order and the last level holds the
/// root alone. Each level above 0 has `ceil(len / 2)` digests of the level
/// below: pairs are merged with [`hash_pair`](crate::hash_pair) and an
/// unpaired last digest is carried up unchanged.
pub struct MerkleTree<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> {
    levels: Vec<Vec<[u8; HASH_SIZE]>>,
    config: TreeConfig,
    _phantom: PhantomData<fn() -> H>,
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> MerkleTree<HASH_SIZE, H> {
    /// Builds a tree with the default [`TreeConfig`].
    pub fn new<T: AsRef<[u8]> + Sync>(leaves: &[T]) -> Result<Self, TreeError> {
        Self::with_config(leaves, TreeConfig::default())
    }

    /// Builds a tree. Fails with [`TreeError::EmptyLeaves`] when `leaves` is empty.
    pub fn with_config<T: AsRef<[u8]> + Sync>(
        leaves: &[T],
        config: TreeConfig,
    ) -> Result<Self, TreeError> {
        let levels = build::build_levels::<HASH_SIZE, H, T>(leaves, &config)?;
        Ok(Self {
            levels,
            config,
            _phantom: PhantomData,
        })
    }

    /// Configuration the tree was built with, reused by [`MerkleTree::leaf_proofs`].
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Root of the tree.
    pub fn root(&self) -> [u8; HASH_SIZE] {
        // levels is never empty and the last level always holds one digest
        self.levels[self.levels.len() - 1][0]
    }

    /// All levels, from the leaf hashes up to the root.
    pub fn levels(&self) -> &[Vec<[u8; HASH_SIZE]>] {
        &self.levels
    }

    /// Leaf hashes in input order.
    pub fn leaves(&self) -> &[[u8; HASH_SIZE]] {
        &self.levels[0]
    }

    /// Number of leaves the tree was built from, duplicates included.
    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of levels, counting the leaf level and the root level.
    pub fn height(&self) -> usize {
        self.levels.len()
    }

    /// Position of `leaf` in the input list, `None` if it is not in the tree.
    ///
    /// This is a linear scan. When the same leaf was given several times the
    /// first position is returned. Callers needing constant time lookups should
    /// keep their own digest to index map built from [`MerkleTree::leaves`].
    pub fn index(&self, leaf: &[u8]) -> Option<usize> {
        self.index_of_digest(&H::hash(leaf))
    }

    /// Position of the first leaf whose hash is `digest`.
    pub fn index_of_digest(&self, digest: &[u8; HASH_SIZE]) -> Option<usize> {
        self.levels[0].iter().position(|leaf| leaf == digest)
    }

    /// Inclusion proof for the leaf at `index`.
    pub fn proof(&self, index: usize) -> Result<Proof<HASH_SIZE>, TreeError> {
        let len = self.leaf_count();
        if index >= len {
            return Err(TreeError::IndexOutOfBounds { index, len });
        }
        Ok(self.proof_at(index))
    }

    /// Inclusion proof for `leaf`, located with [`MerkleTree::index`].
    pub fn proof_for_leaf(&self, leaf: &[u8]) -> Result<Proof<HASH_SIZE>, TreeError> {
        let index = self.index(leaf).ok_or(TreeError::LeafNotFound)?;
        Ok(self.proof_at(index))
    }

    /// Checks `proof` for `leaf` against the root of this tree.
    pub fn verify(&self, proof: &Proof<HASH_SIZE>, leaf: &[u8]) -> bool {
        proof.verify::<H>(&self.root(), leaf)
    }

    /// Walks from `index` up to the level below the root, collecting siblings.
    /// A node without sibling was carried up during construction and adds
    /// nothing to the proof.
    fn proof_at(&self, mut index: usize) -> Proof<HASH_SIZE> {
        let mut siblings = Vec::with_capacity(self.levels.len() - 1);
        for level in &self.levels[..self.levels.len() - 1] {
            if let Some(sibling) = level.get(index ^ 1) {
                siblings.push(*sibling);
            }
            index /= 2;
        }
        Proof::new(siblings)
    }
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> Clone for MerkleTree<HASH_SIZE, H> {
    fn clone(&self) -> Self {
        Self {
            levels: self.levels.clone(),
            config: self.config,
            _phantom: PhantomData,
        }
    }
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> std::fmt::Debug for MerkleTree<HASH_SIZE, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MerkleTree {{ leaves: {}, height: {}, root: {:?} }}",
            self.leaf_count(),
            self.height(),
            self.root()
        )
    }
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> Display for MerkleTree<HASH_SIZE, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MerkleTree {{ leaves: {}, height: {}, root: {} }}",
            self.leaf_count(),
            self.height(),
            hex::encode(self.root())
        )
    }
}
