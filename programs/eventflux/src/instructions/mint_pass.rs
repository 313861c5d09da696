use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::{
    constants::{DISCRIMINATOR_LENGTH, EVENT_PASS_SEED, EVENT_SEED, VAULT_STATE_SEED, VAULT_TREASURY_SEED},
    events::PassMinted,
    state::{Event, EventPass, VaultState},
};

/// Contextual accounts required to mint an event pass.
#[derive(Accounts)]
#[instruction(tier_id: u8)]
pub struct MintPass<'info> {
    /// The event for which the pass is being minted.
    #[account(
        mut,
        seeds = [EVENT_SEED, event.organizer.as_ref(), event.event_id.to_le_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Account<'info, Event>,

    /// The event's vault ledger, credited with the ticket price.
    #[account(
        mut,
        seeds = [VAULT_STATE_SEED, event.key().as_ref()],
        bump = vault_state.bump,
        has_one = event,
    )]
    pub vault_state: Account<'info, VaultState>,

    /// The lamport purse receiving the payment.
    #[account(
        mut,
        seeds = [VAULT_TREASURY_SEED, event.key().as_ref()],
        bump = vault_state.vault_treasury_bump,
    )]
    /// CHECK: lamports-only PDA controlled by this program.
    pub vault_treasury: AccountInfo<'info>,

    /// The new pass record. One pass exists per (event, attendee, tier).
    #[account(
        init,
        payer = attendee,
        space = DISCRIMINATOR_LENGTH + EventPass::INIT_SPACE,
        seeds = [EVENT_PASS_SEED, event.key().as_ref(), attendee.key().as_ref(), &[tier_id]],
        bump,
    )]
    pub event_pass: Account<'info, EventPass>,

    /// The attendee buying the pass. Must be a signer and pays the tier price.
    #[account(mut)]
    pub attendee: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Handles the logic for minting a new event pass.
///
/// Reserves a slot in the requested tier, writes the pass record, and moves
/// the tier price from the attendee into the vault treasury. There is no
/// time-window gate: a pass can be bought before the event starts or after
/// it ends, as long as the tier has supply left.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
/// * `tier_id` - The tier to mint from.
///
/// # Returns
///
/// An empty `Result` indicating success or failure.
pub fn mint_pass_handler(ctx: Context<MintPass>, tier_id: u8) -> Result<()> {
    let clock = Clock::get()?;

    let event = &mut ctx.accounts.event;
    let price = event.register_sale(tier_id)?;
    let event_key = event.key();

    // Initialize Pass Record
    let event_pass = &mut ctx.accounts.event_pass;
    event_pass.event = event_key;
    event_pass.owner = ctx.accounts.attendee.key();
    event_pass.tier_id = tier_id;
    event_pass.price_paid = price;
    event_pass.minted_at = clock.unix_timestamp;
    event_pass.checked_in = false;
    event_pass.checked_in_at = None;
    event_pass.loyalty_mint = None;
    event_pass.bump = ctx.bumps.event_pass;

    // Payment Transfer
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.attendee.to_account_info(),
                to: ctx.accounts.vault_treasury.to_account_info(),
            },
        ),
        price,
    )?;

    ctx.accounts.vault_state.record_deposit(price)?;

    emit!(PassMinted {
        event: event_key,
        event_pass: ctx.accounts.event_pass.key(),
        owner: ctx.accounts.attendee.key(),
        tier_id,
        price_paid: price,
    });

    msg!("Pass minted for tier {}", tier_id);

    Ok(())
}
