//! Error types for the allow-list Merkle tree

use std::error::Error;
use std::fmt::Display;

/// Error type for tree operations
#[derive(Debug, PartialEq, Clone)]
pub enum TreeError {
    /// A tree needs at least one leaf
    EmptyLeaves,
    /// Leaf index is past the end of the leaf level
    IndexOutOfBounds { index: usize, len: usize },
    /// Leaf is not part of the tree
    LeafNotFound,
    /// Encoded proof is truncated or has trailing bytes
    MalformedProof,
    /// Proof has more siblings than its encoding can count
    ProofTooLong { len: usize },
    /// Hex digest could not be decoded
    InvalidHex(hex::FromHexError),
}

impl Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeError::EmptyLeaves => write!(f, "Cannot build a tree without leaves"),
            TreeError::IndexOutOfBounds { index, len } => {
                write!(f, "Leaf index {} out of bounds for {} leaves", index, len)
            }
            TreeError::LeafNotFound => write!(f, "Leaf not found in tree"),
            TreeError::MalformedProof => write!(f, "Malformed proof encoding"),
            TreeError::ProofTooLong { len } => {
                write!(f, "Proof of {} siblings is too long to encode", len)
            }
            TreeError::InvalidHex(e) => write!(f, "Invalid hex digest: {}", e),
        }
    }
}

impl Error for TreeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TreeError::InvalidHex(e) => Some(e),
            _ => None,
        }
    }
}

impl From<hex::FromHexError> for TreeError {
    fn from(e: hex::FromHexError) -> Self {
        TreeError::InvalidHex(e)
    }
}

#[cfg(test)]
mod test {
    use super::TreeError;

    #[test]
    fn test_error_display() {
        assert_eq!(
            TreeError::EmptyLeaves.to_string(),
            "Cannot build a tree without leaves"
        );
        assert_eq!(
            TreeError::IndexOutOfBounds { index: 7, len: 5 }.to_string(),
            "Leaf index 7 out of bounds for 5 leaves"
        );
        assert_eq!(
            TreeError::ProofTooLong { len: 65536 }.to_string(),
            "Proof of 65536 siblings is too long to encode"
        );
        assert_eq!(
            TreeError::from(hex::FromHexError::OddLength).to_string(),
            "Invalid hex digest: Odd number of digits"
        );
    }
}
