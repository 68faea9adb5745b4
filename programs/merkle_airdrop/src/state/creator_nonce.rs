use anchor_lang::prelude::*;
use crate::error::*;

/**
 * Creator nonce account
 *
 * Counts the airdrops deployed by one creator so that each new airdrop
 * derives a fresh PDA, even for the same token mint.
 *
 * Derivation: ["creator_nonce", creator]
 */
#[account]
#[derive(Default, Debug)]
pub struct CreatorNonce {
    /// Increments with each airdrop creation
    pub nonce: u32,
}

impl CreatorNonce {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<CreatorNonce>();

    /// Nonce used in the airdrop PDA seeds. Wraps instead of panicking at
    /// u32::MAX so that next_nonce gets to report the overflow.
    pub fn seed_nonce(&self) -> u32 {
        self.nonce.wrapping_add(1)
    }

    /// Nonce the next airdrop of this creator is derived with
    pub fn next_nonce(&self) -> Result<u32> {
        self.nonce
            .checked_add(1)
            .ok_or_else(|| error!(AirdropError::ArithmeticOverflow))
    }
}
