use anchor_lang::prelude::*;

/// Event emitted when a new airdrop is created
#[event]
pub struct AirdropCreated {
    /// The airdrop account public key
    pub airdrop: Pubkey,
    /// Nonce of the airdrop for its creator
    pub nonce: u32,
    /// Creator who paid for the accounts
    pub creator: Pubkey,
    /// Token mint address
    pub token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
    /// Earliest Unix timestamp at which claims succeed
    pub release_time: i64,
    /// The merkle root of all (recipient, amount) leaves
    pub merkle_root: [u8; 32],
}

/// Event emitted when tokens are deposited into the vault
#[event]
pub struct AirdropFunded {
    /// The airdrop account public key
    pub airdrop: Pubkey,
    /// Account that deposited the tokens
    pub funder: Pubkey,
    /// Amount deposited in this transaction
    pub amount: u64,
    /// Vault balance after the deposit
    pub vault_balance: u64,
}

/// Event emitted when a recipient's allocation is paid out
#[event]
pub struct TokensClaimed {
    /// The airdrop account public key
    pub airdrop: Pubkey,
    /// Recipient the tokens were sent to
    pub recipient: Pubkey,
    /// Signer that submitted the claim, may differ from the recipient
    pub payer: Pubkey,
    /// Amount paid out
    pub amount: u64,
    /// Total amount claimed from the airdrop by all recipients
    pub total_claimed: u64,
}
