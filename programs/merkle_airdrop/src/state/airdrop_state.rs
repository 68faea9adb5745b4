use anchor_lang::prelude::*;
use crate::error::*;
use crate::utils::{leaf_hash, verify};
use crate::state::ClaimStatus;

/**
 * Main airdrop state account
 *
 * Holds the immutable parameters of one airdrop: the token being paid out,
 * the release time and the merkle root committing to every
 * (recipient, amount) pair. Only the running totals change after creation.
 *
 * Derivation: ["airdrop", token_mint, creator, nonce]
 *
 * Lifecycle:
 * 1. Created during the initialize instruction
 * 2. Totals updated on every successful claim
 * 3. Never closed; inert once the vault is empty or everyone has claimed
 */
#[account]
#[derive(Default, Debug)]
pub struct Airdrop {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation when signing payouts
    pub bump: u8,

    /// Nonce number for this airdrop
    /// - Allows several airdrops for the same token/creator pair
    pub nonce: u32,

    /// Creator who paid for the airdrop accounts
    /// - Has no privileges after creation
    pub creator: Pubkey,

    /// Token mint address
    /// - Specifies which token is being paid out
    pub token_mint: Pubkey,

    /// Token vault account address
    /// - PDA that holds the payout balance
    /// - Derived from: ["vault", airdrop_key]
    pub token_vault: Pubkey,

    /// Release time (Unix timestamp)
    /// - Claims fail before this time
    /// - Written once at creation
    pub release_time: i64,

    /// Merkle root for claim verification
    /// - Leaves are sha256(recipient || amount_le)
    /// - Written once at creation
    pub merkle_root: [u8; 32],

    /// Total amount of tokens paid out to all recipients
    pub total_claimed: u64,

    /// Number of recipients that have claimed
    pub num_claimed: u64,
}

impl Airdrop {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Airdrop>();

    /// Validates the creation parameters against the current time
    pub fn validate_new(now: i64, release_time: i64, merkle_root: &[u8; 32]) -> Result<()> {
        // Release time must be strictly in the future
        require!(release_time > now, AirdropError::InvalidReleaseTime);
        // A zero root is the unset sentinel, nothing can be proven under it
        require!(*merkle_root != [0; 32], AirdropError::InvalidMerkleRoot);
        Ok(())
    }

    /// Mint of the token paid out by this airdrop
    pub fn token(&self) -> Pubkey {
        self.token_mint
    }

    /// Earliest Unix timestamp at which a claim may succeed
    pub fn release_time(&self) -> i64 {
        self.release_time
    }

    pub fn merkle_root(&self) -> [u8; 32] {
        self.merkle_root
    }

    /**
     * Runs the claim checks in their fixed order
     *
     * @param now - Current Unix timestamp
     * @param available - Balance currently held by the vault
     * @param already_claimed - Claimed flag of the recipient
     * @param recipient - Recipient the allocation belongs to
     * @param amount - Allocation amount committed in the tree
     * @param proof - Sibling hashes from leaf to root
     *
     * Order:
     * 1. Release time reached
     * 2. Vault balance is non-zero and covers the amount
     * 3. Recipient has not claimed yet
     * 4. (recipient, amount) is proven under the merkle root
     *
     * Reads only; settle_claim applies the effects once this returns Ok.
     */
    pub fn check_claim(
        &self,
        now: i64,
        available: u64,
        already_claimed: bool,
        recipient: &Pubkey,
        amount: u64,
        proof: &[[u8; 32]],
    ) -> Result<()> {
        require!(now >= self.release_time, AirdropError::NotReleaseTime);

        require!(
            available > 0 && available >= amount,
            AirdropError::NotEnoughToken
        );

        require!(!already_claimed, AirdropError::AlreadyClaimed);

        let leaf = leaf_hash(recipient, amount);
        require!(
            verify(proof, self.merkle_root, leaf),
            AirdropError::NotInMerkle
        );

        Ok(())
    }

    /**
     * Settles one claim: checks, payout, then state updates
     *
     * @param status - Claim status of the recipient
     * @param now - Current Unix timestamp
     * @param available - Balance currently held by the vault
     * @param recipient - Recipient the allocation belongs to
     * @param amount - Allocation amount committed in the tree
     * @param proof - Sibling hashes from leaf to root
     * @param transfer - Moves `amount` from the vault to the recipient
     *
     * `transfer` only runs once every check passed, and the claimed flag is
     * only set once `transfer` succeeded. Any error leaves `self` and
     * `status` untouched. Returns the new total claimed.
     */
    pub fn settle_claim<F>(
        &mut self,
        status: &mut ClaimStatus,
        now: i64,
        available: u64,
        recipient: &Pubkey,
        amount: u64,
        proof: &[[u8; 32]],
        transfer: F,
    ) -> Result<u64>
    where
        F: FnOnce() -> Result<()>,
    {
        self.check_claim(now, available, status.has_claimed(), recipient, amount, proof)?;

        transfer()?;

        // record_payout writes nothing when it fails
        let total_claimed = self.record_payout(amount)?;
        status.record_claim(amount, now);
        Ok(total_claimed)
    }

    /// Adds a payout to the running totals and returns the new total claimed
    pub fn record_payout(&mut self, amount: u64) -> Result<u64> {
        let total_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(AirdropError::ArithmeticOverflow)?;
        let num_claimed = self
            .num_claimed
            .checked_add(1)
            .ok_or(AirdropError::ArithmeticOverflow)?;

        self.total_claimed = total_claimed;
        self.num_claimed = num_claimed;
        Ok(total_claimed)
    }
}
