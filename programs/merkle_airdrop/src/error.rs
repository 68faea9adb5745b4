use anchor_lang::prelude::*;

#[error_code]
pub enum AirdropError {
    // Claim errors, reported in check order
    #[msg("Claims are not open before the release time")]
    NotReleaseTime,
    #[msg("Vault does not hold enough tokens for this claim")]
    NotEnoughToken,
    #[msg("Recipient has already claimed")]
    AlreadyClaimed,
    #[msg("Recipient and amount are not in the merkle tree")]
    NotInMerkle,

    // Construction errors
    #[msg("Release time must be in the future")]
    InvalidReleaseTime,
    #[msg("Merkle root must not be zero")]
    InvalidMerkleRoot,

    // Amount validation errors
    #[msg("Invalid amount")]
    InvalidAmount,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match the airdrop's token mint")]
    TokenMintMismatch,
    #[msg("Token account is not owned by the recipient")]
    RecipientMismatch,
}
