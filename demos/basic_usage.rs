//! Basic example of using the allow-list Merkle tree
//!
//! This example demonstrates:
//! - Building a tree from a list of addresses
//! - Getting the root hash
//! - Generating and verifying merkle proofs
//! - Looking up a leaf that is not in the list

use allowlist_merkle::{verify_merkle_proof, Keccak256, KeccakMerkleTree, Proof};

fn main() {
    env_logger::init();

    // The allow-list, in the order it was published
    let addresses: Vec<Vec<u8>> = [
        "E124F06277b5AC791bA45B92853BA9A0ea93327D",
        "07d048f78B7C093B3Ef27D478B78026a70D9734e",
        "38976611f5f7bEAd7e79E752f5B80AE72dD3eFa7",
        "1Ab00ffedD724B930080aD30269083F1453cF34E",
        "860a6bC426C3bb1186b2E11Ac486ABa000C209B4",
    ]
    .iter()
    .map(|address| hex::decode(address).unwrap())
    .collect();

    let tree = KeccakMerkleTree::new(&addresses).unwrap();
    println!("Root hash: {}", hex::encode(tree.root()));
    println!("Tree height: {}", tree.height());

    // Get and verify a merkle proof for the third address
    let proof = tree.proof_for_leaf(&addresses[2]).unwrap();
    println!("Merkle proof length: {}", proof.len());
    println!("{}", proof);

    // A verifier only needs the root, the proof and the address. Here the proof
    // goes through its hex form, the way it would travel to a client.
    let received = Proof::<32>::from_hex(&proof.to_hex()).unwrap();
    let valid = verify_merkle_proof::<32, Keccak256>(&tree.root(), &received, &addresses[2]);
    println!("Proof verification: {}", valid);

    // All proofs at once, in allow-list order
    let proofs = tree.leaf_proofs();
    println!("Computed {} proofs", proofs.len());

    let stranger = hex::decode("0000000000000000000000000000000000000000").unwrap();
    println!("Index of unknown address: {:?}", tree.index(&stranger));
}
