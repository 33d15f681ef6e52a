//! Level by level construction of the tree.

#[cfg(feature = "multi-thread")]
use rayon::prelude::*;

use crate::{hash_pair, Hasher, TreeConfig, TreeError};

/// Hashes the leaves and merges levels until a single digest is left.
pub(super) fn build_levels<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>, T: AsRef<[u8]> + Sync>(
    leaves: &[T],
    config: &TreeConfig,
) -> Result<Vec<Vec<[u8; HASH_SIZE]>>, TreeError> {
    if leaves.is_empty() {
        return Err(TreeError::EmptyLeaves);
    }
    let mut levels = vec![hash_leaves::<HASH_SIZE, H, T>(leaves, config)];
    loop {
        let level = &levels[levels.len() - 1];
        if level.len() == 1 {
            break;
        }
        let next = merge_level::<HASH_SIZE, H>(level, config);
        log::trace!("merged level of {} nodes into {}", level.len(), next.len());
        levels.push(next);
    }
    log::debug!(
        "built merkle tree with {} leaves and {} levels, root {}",
        leaves.len(),
        levels.len(),
        hex::encode(levels[levels.len() - 1][0])
    );
    Ok(levels)
}

fn hash_leaves<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>, T: AsRef<[u8]> + Sync>(
    leaves: &[T],
    config: &TreeConfig,
) -> Vec<[u8; HASH_SIZE]> {
    #[cfg(feature = "multi-thread")]
    if config.parallelize(leaves.len()) {
        return leaves
            .par_iter()
            .map(|leaf| H::hash(leaf.as_ref()))
            .collect();
    }
    #[cfg(not(feature = "multi-thread"))]
    let _ = config;
    leaves.iter().map(|leaf| H::hash(leaf.as_ref())).collect()
}

/// Builds the next level: each pair is merged with [`hash_pair`] and a last
/// unpaired digest is carried up as is.
pub(super) fn merge_level<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
    level: &[[u8; HASH_SIZE]],
    config: &TreeConfig,
) -> Vec<[u8; HASH_SIZE]> {
    #[cfg(feature = "multi-thread")]
    if config.parallelize(level.len()) {
        return level.par_chunks(2).map(merge_chunk::<HASH_SIZE, H>).collect();
    }
    #[cfg(not(feature = "multi-thread"))]
    let _ = config;
    level.chunks(2).map(merge_chunk::<HASH_SIZE, H>).collect()
}

fn merge_chunk<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
    chunk: &[[u8; HASH_SIZE]],
) -> [u8; HASH_SIZE] {
    match chunk {
        [left, right] => hash_pair::<HASH_SIZE, H>(left, right),
        // odd level: no duplication, the node moves up untouched
        [last] => *last,
        _ => unreachable!("chunks(2) yields one or two nodes"),
    }
}
