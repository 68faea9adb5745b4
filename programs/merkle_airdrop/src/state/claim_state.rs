use anchor_lang::prelude::*;

/**
 * Per-recipient claim status account
 *
 * The entry of the claimed mapping for one (airdrop, recipient) pair.
 * A recipient without an account has not claimed.
 *
 * Derivation: ["claim", airdrop_key, recipient]
 *
 * Lifecycle:
 * 1. Created by the first claim attempt that reaches it (init_if_needed)
 * 2. Flipped to claimed once the payout transfer succeeded
 * 3. Never reset
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimStatus {
    /// Whether the recipient's allocation was paid out
    pub claimed: bool,
    /// Amount paid out
    pub amount: u64,
    /// Unix timestamp of the payout
    pub claimed_at: i64,
    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl ClaimStatus {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimStatus>();

    pub fn has_claimed(&self) -> bool {
        self.claimed
    }

    /// Reads the claimed flag from a claim status PDA that may not exist yet.
    /// An account without data has never been claimed against.
    pub fn claimed_in(info: &AccountInfo) -> Result<bool> {
        if info.data_is_empty() {
            return Ok(false);
        }

        let data = info.try_borrow_data()?;
        let status = ClaimStatus::try_deserialize(&mut &data[..])?;
        Ok(status.has_claimed())
    }

    /// Marks the allocation as paid. The flag only ever goes false -> true.
    pub fn record_claim(&mut self, amount: u64, now: i64) {
        self.claimed = true;
        self.amount = amount;
        self.claimed_at = now;
    }
}
