use crate::{Proof, TreeError};
use serde::{Deserialize, Serialize};

/// One tree described by its leaves and the expected root and proofs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidTestCase {
    pub comment: Option<String>,
    pub leaves: Vec<String>,
    pub root: String,
    pub proofs: Vec<Vec<String>>,
    pub absent_leaves: Vec<String>,
}

impl ValidTestCase {
    /// Decode the hex leaves into raw bytes
    pub fn leaves_as_bytes(&self) -> Result<Vec<Vec<u8>>, hex::FromHexError> {
        self.leaves.iter().map(hex::decode).collect()
    }

    /// Decode the absent leaves into raw bytes
    pub fn absent_leaves_as_bytes(&self) -> Result<Vec<Vec<u8>>, hex::FromHexError> {
        self.absent_leaves.iter().map(hex::decode).collect()
    }

    pub fn root_as_bytes(&self) -> Result<[u8; 32], TreeError> {
        let mut root = [0u8; 32];
        hex::decode_to_slice(&self.root, &mut root)?;
        Ok(root)
    }

    /// Parse the expected proof of every leaf
    pub fn to_proofs(&self) -> Result<Vec<Proof<32>>, TreeError> {
        self.proofs
            .iter()
            .map(|siblings| Proof::from_hex(siblings))
            .collect()
    }
}

/// Root structure for the test data files
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestVectors {
    pub hash: String,
    pub valid_test_cases: Vec<ValidTestCase>,
}

impl TestVectors {
    /// Load test vectors from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_conversion() {
        let case = ValidTestCase {
            comment: None,
            leaves: vec!["61".to_string(), "0102".to_string()],
            root: "00".repeat(32),
            proofs: vec![vec!["11".repeat(32)], vec![]],
            absent_leaves: vec!["ff".to_string()],
        };
        assert_eq!(case.leaves_as_bytes().unwrap(), vec![vec![0x61], vec![1, 2]]);
        assert_eq!(case.absent_leaves_as_bytes().unwrap(), vec![vec![0xff]]);
        assert_eq!(case.root_as_bytes().unwrap(), [0; 32]);
        let proofs = case.to_proofs().unwrap();
        assert_eq!(proofs[0].siblings(), &[[0x11; 32]]);
        assert!(proofs[1].is_empty());
    }
}
