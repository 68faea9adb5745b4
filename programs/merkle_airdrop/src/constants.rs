use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seeds used by the airdrop program. Every seed is part of the
 * on-chain address contract: changing one orphans existing accounts.
 */

#[constant]
/// ===== PDA SEED CONSTANTS =====

/// Seed for the creator nonce PDA
/// - Used in: ["creator_nonce", creator]
/// - Hands out a fresh nonce for every airdrop a creator deploys
pub const CREATOR_NONCE_SEED: &str = "creator_nonce";

/// Seed for the airdrop PDA
/// - Used in: ["airdrop", token_mint, creator, nonce]
/// - Keeps independently deployed airdrops isolated from each other
pub const AIRDROP_SEED: &str = "airdrop";

/// Seed for the token vault PDA
/// - Used in: ["vault", airdrop_key]
/// - The vault is owned by the airdrop PDA, payouts are signed with its seeds
pub const VAULT_SEED: &str = "vault";

/// Seed for the claim status PDA
/// - Used in: ["claim", airdrop_key, recipient]
/// - One account per (airdrop, recipient) pair; it is the claimed flag
pub const CLAIM_SEED: &str = "claim";
