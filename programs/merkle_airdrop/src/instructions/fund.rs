use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::transfer_token;
use crate::event::*;

/**
 * Account context for funding an airdrop vault
 *
 * Access Control: Anyone holding the token may top up the vault
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Fund<'info> {
    pub airdrop: Account<'info, Airdrop>,

    /// Token vault receiving the deposit
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Funder's token account the deposit is taken from
    #[account(
        mut,
        token::mint = airdrop.token_mint,
        token::authority = funder,
        token::token_program = token_program,
    )]
    pub funder_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == airdrop.token_mint @ AirdropError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    pub funder: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Deposits tokens into the airdrop vault
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Amount of tokens to deposit
 */
pub fn handle_fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
    require!(amount > 0, AirdropError::InvalidAmount);

    transfer_token(
        ctx.accounts.funder.to_account_info(),
        ctx.accounts.funder_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        None, // Funder signs the transfer
    )?;

    ctx.accounts.token_vault.reload()?;
    let vault_balance = ctx.accounts.token_vault.amount;

    msg!("Airdrop {} funded with {}, vault holds {}", ctx.accounts.airdrop.key(), amount, vault_balance);

    emit_cpi!(AirdropFunded {
        airdrop: ctx.accounts.airdrop.key(),
        funder: ctx.accounts.funder.key(),
        amount,
        vault_balance,
    });

    Ok(())
}
