use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::hash::hashv;

/// Leaf of the allocation tree: sha256(recipient || amount_le), no prefix
/// or separator. Must match the off-chain tree builder byte for byte.
pub fn leaf_hash(recipient: &Pubkey, amount: u64) -> [u8; 32] {
    hashv(&[&recipient.to_bytes(), &amount.to_le_bytes()]).to_bytes()
}

/// Parent of two nodes. The pair is sorted before hashing, so proofs carry
/// no left/right position.
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        hashv(&[a, b]).to_bytes()
    } else {
        hashv(&[b, a]).to_bytes()
    }
}

/// Returns true when `leaf` folds up to `root` through `proof`.
/// An empty proof only proves the root itself.
pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    let computed = proof
        .iter()
        .fold(leaf, |node, sibling| hash_pair(&node, sibling));
    computed == root
}
