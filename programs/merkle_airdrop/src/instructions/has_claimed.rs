use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;

/// Read-only context for querying a recipient's claim status
#[derive(Accounts)]
#[instruction(recipient: Pubkey)]
pub struct HasClaimed<'info> {
    pub airdrop: Account<'info, Airdrop>,

    /// CHECK: Pinned to ["claim", airdrop_key, recipient] by seeds; may not
    /// exist yet, which reads as unclaimed
    #[account(
        seeds = [CLAIM_SEED.as_bytes(), airdrop.key().as_ref(), recipient.as_ref()],
        bump
    )]
    pub claim_status: UncheckedAccount<'info>,
}

pub fn handle_has_claimed(ctx: Context<HasClaimed>, _recipient: Pubkey) -> Result<bool> {
    ClaimStatus::claimed_in(&ctx.accounts.claim_status.to_account_info())
}
