use crate::constants::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new airdrop
 *
 * - Creates or updates the creator nonce PDA
 * - Creates the airdrop PDA with the next nonce
 * - Creates the token vault PDA owned by the airdrop PDA
 *
 * The vault starts empty; it is funded separately (fund instruction or a
 * plain token transfer).
 *
 * Access Control: Anyone may create an airdrop
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Nonce state for this creator
    /// - Derived from: ["creator_nonce", creator]
    #[account(
        init_if_needed,
        payer = creator,
        space = CreatorNonce::LEN,
        seeds = [CREATOR_NONCE_SEED.as_bytes(), creator.key().as_ref()],
        bump
    )]
    pub creator_nonce: Account<'info, CreatorNonce>,

    /// The airdrop account (PDA)
    /// - Derived from: ["airdrop", token_mint, creator, next_nonce]
    #[account(
        init,
        payer = creator,
        space = Airdrop::LEN,
        seeds = [
            AIRDROP_SEED.as_bytes(),
            token_mint.key().as_ref(),
            creator.key().as_ref(),
            creator_nonce.seed_nonce().to_le_bytes().as_ref()
        ],
        bump
    )]
    pub airdrop: Account<'info, Airdrop>,

    /// Token vault account (PDA) holding the payout balance
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = airdrop,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump,
        payer = creator,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint paid out by the airdrop
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Pays rent for the new accounts
    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Creates a new airdrop
 *
 * @param ctx - The account context containing all required accounts
 * @param release_time - Unix timestamp from which claims succeed
 * @param merkle_root - Root of the (recipient, amount) tree
 *
 * Both parameters are written here and nowhere else.
 */
pub fn handle_initialize(
    ctx: Context<Initialize>,
    release_time: i64,
    merkle_root: [u8; 32],
) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;
    Airdrop::validate_new(current_time, release_time, &merkle_root)?;

    let creator_nonce = &mut ctx.accounts.creator_nonce;
    let airdrop = &mut ctx.accounts.airdrop;

    let nonce = creator_nonce.next_nonce()?;
    creator_nonce.nonce = nonce;

    airdrop.bump = ctx.bumps.airdrop;
    airdrop.nonce = nonce;
    airdrop.creator = ctx.accounts.creator.key();
    airdrop.token_mint = ctx.accounts.token_mint.key();
    airdrop.token_vault = ctx.accounts.token_vault.key();
    airdrop.release_time = release_time;
    airdrop.merkle_root = merkle_root;
    // total_claimed and num_claimed start at 0

    msg!(
        "Airdrop {} created: nonce={}, release_time={}",
        airdrop.key(),
        nonce,
        release_time
    );

    emit_cpi!(AirdropCreated {
        airdrop: airdrop.key(),
        nonce,
        creator: ctx.accounts.creator.key(),
        token_mint: ctx.accounts.token_mint.key(),
        token_vault: ctx.accounts.token_vault.key(),
        release_time,
        merkle_root,
    });

    Ok(())
}
