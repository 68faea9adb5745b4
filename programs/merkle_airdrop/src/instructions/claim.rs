use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::transfer_token;
use crate::event::*;

/**
 * Account context for claiming an allocation
 *
 * Any signer may submit a claim on behalf of any recipient. The payout always
 * lands in a token account owned by the recipient, never the payer's.
 *
 * Access Control: Anyone with a valid merkle proof for the recipient
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(recipient: Pubkey)]
pub struct Claim<'info> {
    /// The airdrop being claimed from
    /// - Running totals are updated on success
    #[account(mut)]
    pub airdrop: Account<'info, Airdrop>,

    /// Claim status of the recipient
    /// - Created on first use, paid for by the payer
    /// - Derived from: ["claim", airdrop_key, recipient]
    #[account(
        init_if_needed,
        payer = payer,
        space = ClaimStatus::LEN,
        seeds = [CLAIM_SEED.as_bytes(), airdrop.key().as_ref(), recipient.as_ref()],
        bump
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    /// Token vault holding the payout balance
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Recipient's token account receiving the payout
    /// - Must be owned by the recipient
    /// - Must be for the airdrop's token mint
    #[account(
        mut,
        token::mint = airdrop.token_mint,
        token::token_program = token_program,
        constraint = recipient_token_account.owner == recipient @ AirdropError::RecipientMismatch
    )]
    pub recipient_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == airdrop.token_mint @ AirdropError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Submits the claim and pays rent for the claim status
    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Pays out one recipient's allocation
 *
 * @param ctx - The account context containing all required accounts
 * @param recipient - Recipient the allocation belongs to
 * @param amount - Allocation amount committed in the merkle tree
 * @param proof - Sibling hashes from the recipient's leaf to the root
 *
 * All checks and effects go through Airdrop::settle_claim: the checks run in
 * a fixed order, the transfer happens before the claimed flag is set, and a
 * failed transfer aborts the whole transaction leaving the recipient eligible.
 */
pub fn handle_claim(
    ctx: Context<Claim>,
    recipient: Pubkey,
    amount: u64,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;
    let available = ctx.accounts.token_vault.amount;

    let airdrop = &ctx.accounts.airdrop;
    let nonce_bytes = airdrop.nonce.to_le_bytes();
    let token_mint_key = airdrop.token_mint;
    let creator_key = airdrop.creator;
    let airdrop_bump = airdrop.bump;
    let airdrop_key = airdrop.key();

    let seeds = &[
        AIRDROP_SEED.as_bytes(),
        token_mint_key.as_ref(),
        creator_key.as_ref(),
        nonce_bytes.as_ref(),
        &[airdrop_bump],
    ];
    let signer = &[&seeds[..]];

    let airdrop_info = ctx.accounts.airdrop.to_account_info();
    let vault_info = ctx.accounts.token_vault.to_account_info();
    let recipient_info = ctx.accounts.recipient_token_account.to_account_info();
    let mint_info = ctx.accounts.token_mint.to_account_info();
    let token_program_info = ctx.accounts.token_program.to_account_info();
    let decimals = ctx.accounts.token_mint.decimals;

    let claim_status = &mut ctx.accounts.claim_status;
    claim_status.bump = ctx.bumps.claim_status;

    // Checks, PDA-signed payout, then the claimed flag and totals
    let total_claimed = ctx.accounts.airdrop.settle_claim(
        claim_status,
        current_time,
        available,
        &recipient,
        amount,
        &proof,
        || {
            transfer_token(
                airdrop_info,
                vault_info,
                recipient_info,
                mint_info,
                token_program_info,
                amount,
                decimals,
                Some(signer),
            )
        },
    )?;

    msg!("Claimed {} for {} (payer {})", amount, recipient, ctx.accounts.payer.key());

    emit_cpi!(TokensClaimed {
        airdrop: airdrop_key,
        recipient,
        payer: ctx.accounts.payer.key(),
        amount,
        total_claimed,
    });

    Ok(())
}
