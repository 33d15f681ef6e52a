//! Runtime configuration for tree construction and batch proof generation.

use std::env;

/// Environment variable overriding [`TreeConfig::parallelization_cutoff`].
pub const PAR_CUTOFF_ENV: &str = "ALLOWLIST_MERKLE_PAR_CUTOFF";

/// Work below this many items stays on the calling thread.
pub const DEFAULT_PARALLELIZATION_CUTOFF: usize = 1024;

/// Smallest cutoff read from the environment: a parallel merge needs at least
/// one pair of nodes.
pub const MIN_PARALLELIZATION_CUTOFF: usize = 2;

/// Tuning knobs of a [`MerkleTree`](crate::MerkleTree).
///
/// Parallel and sequential execution always produce the same tree and the same
/// proofs; the cutoff only decides where the work runs. Without the
/// `multi-thread` feature everything is sequential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    /// Minimum number of leaves (or nodes of a level) before work is handed to
    /// the rayon thread pool.
    pub parallelization_cutoff: usize,
}

impl TreeConfig {
    pub const fn new(parallelization_cutoff: usize) -> Self {
        Self {
            parallelization_cutoff,
        }
    }

    /// Never dispatch work to other threads.
    pub const fn sequential() -> Self {
        Self::new(usize::MAX)
    }

    /// Reads the cutoff from [`PAR_CUTOFF_ENV`], falling back to
    /// [`DEFAULT_PARALLELIZATION_CUTOFF`] when unset or unparsable. Values below
    /// [`MIN_PARALLELIZATION_CUTOFF`] are raised to it.
    pub fn from_env() -> Self {
        let cutoff = match env::var(PAR_CUTOFF_ENV) {
            Ok(raw) => match raw.trim().parse::<usize>() {
                Ok(cutoff) => cutoff.max(MIN_PARALLELIZATION_CUTOFF),
                Err(_) => {
                    log::warn!(
                        "ignoring {}={:?}: not a number, using {}",
                        PAR_CUTOFF_ENV,
                        raw,
                        DEFAULT_PARALLELIZATION_CUTOFF
                    );
                    DEFAULT_PARALLELIZATION_CUTOFF
                }
            },
            Err(_) => DEFAULT_PARALLELIZATION_CUTOFF,
        };
        Self::new(cutoff)
    }

    /// Whether `items` units of work should be spread over the thread pool.
    pub fn parallelize(&self, items: usize) -> bool {
        cfg!(feature = "multi-thread") && items >= self.parallelization_cutoff
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
