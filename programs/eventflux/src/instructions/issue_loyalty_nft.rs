use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{mint_to, Mint, MintTo, Token, TokenAccount},
};

use crate::{
    constants::{EVENT_PASS_SEED, EVENT_SEED, LOYALTY_MINT_SEED},
    errors::EventFluxError,
    events::LoyaltyNftIssued,
    state::{Event, EventPass},
};

/// Contextual accounts required to issue the loyalty reward for a pass.
#[derive(Accounts)]
pub struct IssueLoyaltyNft<'info> {
    /// The event the pass belongs to.
    #[account(
        seeds = [EVENT_SEED, event.organizer.as_ref(), event.event_id.to_le_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Account<'info, Event>,

    /// The pass earning the reward. Must already be checked in.
    #[account(
        mut,
        seeds = [EVENT_PASS_SEED, event.key().as_ref(), event_pass.owner.as_ref(), &[event_pass.tier_id]],
        bump = event_pass.bump,
        has_one = event,
    )]
    pub event_pass: Account<'info, EventPass>,

    /// CHECK: only used as the holding-account authority; constrained to the pass owner.
    #[account(address = event_pass.owner)]
    pub pass_owner: UncheckedAccount<'info>,

    /// The reward mint, derived from the pass so each pass gets exactly one.
    #[account(
        init_if_needed,
        payer = organizer,
        seeds = [LOYALTY_MINT_SEED, event_pass.key().as_ref()],
        bump,
        mint::decimals = 0,
        mint::authority = organizer,
    )]
    pub loyalty_mint: Account<'info, Mint>,

    /// The pass owner's Associated Token Account receiving the reward unit.
    /// It will be created if it does not exist.
    #[account(
        init_if_needed,
        payer = organizer,
        associated_token::mint = loyalty_mint,
        associated_token::authority = pass_owner,
    )]
    pub loyalty_token_account: Account<'info, TokenAccount>,

    /// The event organizer, who authorizes and funds the issuance.
    #[account(mut, address = event.organizer @ EventFluxError::UnauthorizedOrganizer)]
    pub organizer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Handles the logic for issuing the loyalty NFT for a checked-in pass.
///
/// Issuance is a single one-way step per pass: the mint address is recorded
/// on the pass record and exactly one unit is minted to the owner's holding
/// account.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
///
/// # Returns
///
/// An empty `Result` indicating success or failure.
pub fn issue_loyalty_nft_handler(ctx: Context<IssueLoyaltyNft>) -> Result<()> {
    let loyalty_mint = ctx.accounts.loyalty_mint.key();
    ctx.accounts.event_pass.attach_loyalty_mint(loyalty_mint)?;

    mint_to(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.loyalty_mint.to_account_info(),
                to: ctx.accounts.loyalty_token_account.to_account_info(),
                authority: ctx.accounts.organizer.to_account_info(),
            },
        ),
        1,
    )?;

    emit!(LoyaltyNftIssued {
        event: ctx.accounts.event.key(),
        event_pass: ctx.accounts.event_pass.key(),
        loyalty_mint,
        owner: ctx.accounts.event_pass.owner,
    });

    Ok(())
}
