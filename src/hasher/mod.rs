mod keccak;

use sha2::{Digest, Sha256};

pub use keccak::Keccak256;

impl Hasher<32> for Sha256 {
    fn hash(data: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.finalize().into()
    }
}

/// Simple hash trait required to hash the leaves and nodes of the tree
///
/// # Type Parameters
/// * `HASH_SIZE` - The size of the hash digest in bytes
pub trait Hasher<const HASH_SIZE: usize> {
    fn hash(data: &[u8]) -> [u8; HASH_SIZE];
}

/// Merges two sibling digests into their parent.
///
/// The smaller digest (byte-lexicographic order) is hashed first, so the parent
/// does not depend on which sibling sits on the left.
pub fn hash_pair<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
    a: &[u8; HASH_SIZE],
    b: &[u8; HASH_SIZE],
) -> [u8; HASH_SIZE] {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    H::hash([first.as_slice(), second.as_slice()].concat().as_slice())
}

#[cfg(test)]
mod test {
    use super::{hash_pair, Hasher, Keccak256};
    use hex_literal::hex;
    use sha2::Sha256;

    #[test]
    fn test_sha256_hasher() {
        assert_eq!(
            <Sha256 as Hasher<32>>::hash(b""),
            hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
        );
    }

    #[test]
    fn test_hash_pair_is_order_independent() {
        let a = Keccak256::hash(b"a");
        let b = Keccak256::hash(b"b");
        assert_eq!(
            hash_pair::<32, Keccak256>(&a, &b),
            hash_pair::<32, Keccak256>(&b, &a)
        );
        assert_eq!(
            hash_pair::<32, Keccak256>(&a, &b),
            hex!("805b21d846b189efaeb0377d6bb0d201b3872a363e607c25088f025b0c6ae1f8")
        );
    }

    #[test]
    fn test_hash_pair_sorts_before_hashing() {
        let a = Keccak256::hash(b"a");
        let b = Keccak256::hash(b"b");
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        assert_eq!(
            hash_pair::<32, Keccak256>(&high, &low),
            Keccak256::hash([low, high].concat().as_slice())
        );
    }
}
