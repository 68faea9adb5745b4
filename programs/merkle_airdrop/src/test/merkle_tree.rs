use anchor_lang::prelude::Pubkey;
use crate::utils::{hash_pair, leaf_hash};

/// One (recipient, amount) allocation of the airdrop
#[derive(Debug, Clone)]
pub struct Allocation {
    pub recipient: Pubkey,
    pub amount: u64,
}

impl Allocation {
    pub fn new(recipient: Pubkey, amount: u64) -> Self {
        Self { recipient, amount }
    }

    pub fn leaf(&self) -> [u8; 32] {
        leaf_hash(&self.recipient, self.amount)
    }
}

/// Builds the allocation tree the same way the off-chain tool does:
/// sorted-pair parents, an odd node at the end of a level is paired with itself.
pub struct SimpleMerkleTree {
    /// levels[0] holds the leaves, the last level holds the root
    levels: Vec<Vec<[u8; 32]>>,
}

impl SimpleMerkleTree {
    pub fn new(allocations: &[Allocation]) -> Self {
        let leaves = allocations.iter().map(Allocation::leaf).collect();
        Self::from_leaves(leaves)
    }

    pub fn from_leaves(leaves: Vec<[u8; 32]>) -> Self {
        let mut levels = vec![leaves];

        while levels.last().map_or(false, |level| level.len() > 1) {
            let level = &levels[levels.len() - 1];
            let parents: Vec<[u8; 32]> = level
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => hash_pair(left, right),
                    [single] => hash_pair(single, single),
                    _ => unreachable!(),
                })
                .collect();
            levels.push(parents);
        }

        Self { levels }
    }

    pub fn root(&self) -> Option<[u8; 32]> {
        self.levels.last().and_then(|level| level.first().copied())
    }

    /// Sibling path from the leaf at `index` up to the root
    pub fn proof(&self, index: usize) -> Result<Vec<[u8; 32]>, &'static str> {
        if index >= self.levels[0].len() {
            return Err("Index out of bounds");
        }

        let mut proof = Vec::new();
        let mut current = index;

        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = if current % 2 == 0 {
                // Missing right sibling: the node was paired with itself
                level.get(current + 1).unwrap_or(&level[current])
            } else {
                &level[current - 1]
            };
            proof.push(*sibling);
            current /= 2;
        }

        Ok(proof)
    }
}
