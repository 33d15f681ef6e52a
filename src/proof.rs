//! Inclusion proofs.
//!
//! A proof is the list of sibling digests met while walking from a leaf up to the
//! root. It carries no left/right information: siblings are always combined with
//! [`hash_pair`], which sorts the two digests before hashing.
//!
//! Proofs can be hex encoded for transport or packed into a compact byte string
//! for storage.
use std::fmt::Display;

use crate::{hash_pair, Hasher, TreeError};

/// A merkle proof for a single leaf.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Proof<const HASH_SIZE: usize> {
    siblings: Vec<[u8; HASH_SIZE]>,
}

impl<const HASH_SIZE: usize> Proof<HASH_SIZE> {
    /// Creates a new proof from sibling digests ordered from the leaf level up.
    pub fn new(siblings: Vec<[u8; HASH_SIZE]>) -> Self {
        Self { siblings }
    }

    /// Returns the sibling digests in the proof.
    pub fn siblings(&self) -> &[[u8; HASH_SIZE]] {
        &self.siblings
    }

    /// Number of siblings. Shorter than the tree height minus one when the leaf
    /// was carried up on an odd level.
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    /// A proof is empty for the only leaf of a single-leaf tree.
    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Consumes the proof, returning its sibling digests.
    pub fn into_siblings(self) -> Vec<[u8; HASH_SIZE]> {
        self.siblings
    }

    /// Recomputes the root implied by this proof for `leaf`.
    pub fn root<H: Hasher<HASH_SIZE>>(&self, leaf: &[u8]) -> [u8; HASH_SIZE] {
        self.siblings
            .iter()
            .fold(H::hash(leaf), |current, sibling| {
                hash_pair::<HASH_SIZE, H>(&current, sibling)
            })
    }

    /// Checks that this proof links `leaf` to `root`.
    pub fn verify<H: Hasher<HASH_SIZE>>(&self, root: &[u8; HASH_SIZE], leaf: &[u8]) -> bool {
        self.root::<H>(leaf) == *root
    }

    /// Hex encodes every sibling, without `0x` prefix.
    pub fn to_hex(&self) -> Vec<String> {
        self.siblings.iter().map(hex::encode).collect()
    }

    /// Parses hex encoded siblings. A leading `0x` is accepted.
    pub fn from_hex<S: AsRef<str>>(siblings: &[S]) -> Result<Self, TreeError> {
        let siblings = siblings
            .iter()
            .map(|s| -> Result<[u8; HASH_SIZE], TreeError> {
                let s = s.as_ref();
                let s = s.strip_prefix("0x").unwrap_or(s);
                let mut digest = [0u8; HASH_SIZE];
                hex::decode_to_slice(s, &mut digest)?;
                Ok(digest)
            })
            .collect::<Result<Vec<_>, TreeError>>()?;
        Ok(Self::new(siblings))
    }

    /// Encodes the proof into a byte vector: the number of siblings as a big
    /// endian `u16` followed by the siblings.
    ///
    /// Fails with [`TreeError::ProofTooLong`] when the sibling count does not fit
    /// in a `u16`. Proofs produced by a tree never get that long.
    pub fn encode(&self) -> Result<Vec<u8>, TreeError> {
        let count = u16::try_from(self.siblings.len()).map_err(|_| TreeError::ProofTooLong {
            len: self.siblings.len(),
        })?;
        let mut encoded = Vec::with_capacity(2 + self.siblings.len() * HASH_SIZE);
        encoded.extend_from_slice(&count.to_be_bytes());
        for sibling in self.siblings.iter() {
            encoded.extend_from_slice(sibling);
        }
        Ok(encoded)
    }

    /// Decodes a proof produced by [`Proof::encode`].
    pub fn decode(data: &[u8]) -> Result<Self, TreeError> {
        if data.len() < 2 {
            return Err(TreeError::MalformedProof);
        }
        let (count, body) = data.split_at(2);
        let count = u16::from_be_bytes([count[0], count[1]]) as usize;
        if body.len() != count * HASH_SIZE {
            return Err(TreeError::MalformedProof);
        }
        let siblings = body
            .chunks_exact(HASH_SIZE)
            .map(|chunk| {
                let mut digest = [0u8; HASH_SIZE];
                digest.copy_from_slice(chunk);
                digest
            })
            .collect();
        Ok(Self::new(siblings))
    }
}

impl<const HASH_SIZE: usize> Display for Proof<HASH_SIZE> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Proof [{}]", self.to_hex().join(", "))
    }
}

/// Verify a merkle proof for a given leaf.
///
/// # Arguments
///
/// * `root` - The expected root of the tree
/// * `proof` - The proof to verify
/// * `leaf` - The raw leaf bytes, hashed before walking up the proof
///
/// # Returns
///
/// Returns `true` if the proof links the leaf to the root. A proof from another
/// tree, a truncated proof or a leaf that is not in the tree all give `false`.
pub fn verify_merkle_proof<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
    root: &[u8; HASH_SIZE],
    proof: &Proof<HASH_SIZE>,
    leaf: &[u8],
) -> bool {
    proof.verify::<H>(root, leaf)
}
