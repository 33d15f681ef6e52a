use tiny_keccak::{Hasher as _, Keccak};

use super::Hasher;

/// Keccak-256, the hash used for leaves and nodes of allow-list trees.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Keccak256;

impl Hasher<32> for Keccak256 {
    fn hash(data: &[u8]) -> [u8; 32] {
        let mut keccak = Keccak::v256();
        let mut out = [0u8; 32];
        keccak.update(data);
        keccak.finalize(&mut out);
        out
    }
}

#[cfg(test)]
mod test {
    use super::Keccak256;
    use crate::Hasher;
    use hex_literal::hex;

    #[test]
    fn test_keccak_empty_input() {
        assert_eq!(
            Keccak256::hash(b""),
            hex!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
        );
    }

    #[test]
    fn test_keccak_single_byte() {
        assert_eq!(
            Keccak256::hash(b"a"),
            hex!("3ac225168df54212a25c1c01fd35bebfea408fdac2e31ddd6f80a4bbf9a5f1cb")
        );
    }
}
