#[cfg(feature = "multi-thread")]
use rayon::prelude::*;

use super::MerkleTree;
use crate::{Hasher, Proof};

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> MerkleTree<HASH_SIZE, H> {
    /// Inclusion proofs for every leaf, in leaf order.
    ///
    /// Every proof is computed independently from the shared levels, so large
    /// trees spread the work over the rayon thread pool. The output is indexed
    /// the same way as the input: `leaf_proofs()[i] == proof(i)`.
    pub fn leaf_proofs(&self) -> Vec<Proof<HASH_SIZE>> {
        let count = self.leaf_count();
        #[cfg(feature = "multi-thread")]
        if self.config.parallelize(count) {
            log::debug!("computing {} leaf proofs in parallel", count);
            return (0..count)
                .into_par_iter()
                .map(|index| self.proof_at(index))
                .collect();
        }
        log::debug!("computing {} leaf proofs", count);
        (0..count).map(|index| self.proof_at(index)).collect()
    }
}
