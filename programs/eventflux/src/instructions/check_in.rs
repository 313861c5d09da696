use anchor_lang::prelude::*;

use crate::{
    constants::{EVENT_PASS_SEED, EVENT_SEED},
    errors::EventFluxError,
    events::PassCheckedIn,
    state::{Event, EventPass},
};

/// Contextual accounts required to check in a pass at the venue.
#[derive(Accounts)]
pub struct CheckIn<'info> {
    /// The event the pass belongs to.
    #[account(
        seeds = [EVENT_SEED, event.organizer.as_ref(), event.event_id.to_le_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Account<'info, Event>,

    /// The pass being checked in.
    #[account(
        mut,
        seeds = [EVENT_PASS_SEED, event.key().as_ref(), event_pass.owner.as_ref(), &[event_pass.tier_id]],
        bump = event_pass.bump,
        has_one = event,
    )]
    pub event_pass: Account<'info, EventPass>,

    /// The signer performing the check-in: the organizer, a listed verifier,
    /// or the pass owner themselves.
    pub verifier: Signer<'info>,
}

/// Handles the one-way transition of a pass from minted to checked-in.
/// A second check-in attempt is rejected rather than silently ignored, so
/// gate software can tell a replayed pass apart from a fresh one.
pub fn check_in_handler(ctx: Context<CheckIn>) -> Result<()> {
    let clock = Clock::get()?;
    let event = &ctx.accounts.event;
    let event_pass = &mut ctx.accounts.event_pass;

    require!(
        event.is_authorized_verifier(&ctx.accounts.verifier.key(), &event_pass.owner),
        EventFluxError::UnauthorizedVerifier
    );

    event_pass.mark_checked_in(clock.unix_timestamp)?;

    emit!(PassCheckedIn {
        event: event.key(),
        event_pass: event_pass.key(),
        verifier: ctx.accounts.verifier.key(),
        checked_in_at: clock.unix_timestamp,
    });

    Ok(())
}
