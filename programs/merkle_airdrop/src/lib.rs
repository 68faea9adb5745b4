use anchor_lang::prelude::*;

declare_id!("5jGBL6rgZSSoTLgVoecdPwnaapRUFuzEBUUpTF9FJjMS");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Merkle Airdrop Program
 *
 * Pays a fixed, pre-committed set of (recipient, amount) allocations. Only the
 * merkle root of the allocation list is stored on-chain; each recipient is
 * paid at most once, from the release time onwards, against a merkle proof.
 *
 * Key Features:
 * - Sorted-pair merkle proofs (no left/right flags in the proof)
 * - Root and release time fixed at creation
 * - Claims may be relayed: any signer can claim for any recipient, funds
 *   always go to the recipient
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Creator Nonce PDA: Hands out a fresh nonce per airdrop of a creator
 * - Airdrop PDA: Token mint, release time, merkle root, running totals
 * - Token Vault PDA: Holds the payout balance
 * - Claim Status PDAs: One claimed flag per recipient
 *
 * Workflow:
 * 1. Creator initializes the airdrop with a release time and merkle root
 * 2. Anyone funds the vault
 * 3. From the release time, recipients (or relayers) claim with proofs
 */
#[program]
pub mod merkle_airdrop {
    use super::*;

    /**
     * Creates a new airdrop
     *
     * @param ctx - Account context containing airdrop, vault, nonce and creator accounts
     * @param release_time - Unix timestamp from which claims succeed, must be in the future
     * @param merkle_root - 32-byte root of the (recipient, amount) tree
     *
     * Access Control: Anyone
     */
    pub fn initialize(
        ctx: Context<Initialize>,
        release_time: i64,
        merkle_root: [u8; 32],
    ) -> Result<()> {
        handle_initialize(ctx, release_time, merkle_root)
    }

    /**
     * Deposits tokens into the airdrop vault
     *
     * @param ctx - Account context containing airdrop, vault and funder accounts
     * @param amount - Amount of tokens to deposit
     *
     * Access Control: Anyone
     */
    pub fn fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
        handle_fund(ctx, amount)
    }

    /**
     * Claims a recipient's allocation with merkle proof verification
     *
     * @param ctx - Account context containing airdrop, claim status and token accounts
     * @param recipient - Recipient the allocation belongs to
     * @param amount - Allocation amount committed in the tree
     * @param proof - Array of 32-byte hashes forming the merkle proof
     *
     * Access Control: Any signer; funds always go to the recipient
     */
    pub fn claim(
        ctx: Context<Claim>,
        recipient: Pubkey,
        amount: u64,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        handle_claim(ctx, recipient, amount, proof)
    }

    /**
     * Returns whether the recipient has claimed, as return data
     *
     * @param ctx - Account context containing airdrop and claim status accounts
     * @param recipient - Recipient to look up
     */
    pub fn has_claimed(ctx: Context<HasClaimed>, recipient: Pubkey) -> Result<bool> {
        handle_has_claimed(ctx, recipient)
    }
}
