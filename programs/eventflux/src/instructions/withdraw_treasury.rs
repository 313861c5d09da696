use anchor_lang::prelude::*;

use crate::{
    constants::{EVENT_SEED, VAULT_STATE_SEED, VAULT_TREASURY_SEED},
    errors::EventFluxError,
    events::TreasurySettled,
    state::{Event, VaultState},
};

/// Contextual accounts required to settle an event and drain its treasury.
#[derive(Accounts)]
pub struct WithdrawTreasury<'info> {
    /// The event being settled.
    #[account(
        mut,
        seeds = [EVENT_SEED, event.organizer.as_ref(), event.event_id.to_le_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Account<'info, Event>,

    /// The event's vault ledger, where the withdrawal is recorded.
    #[account(
        mut,
        seeds = [VAULT_STATE_SEED, event.key().as_ref()],
        bump = vault_state.bump,
        has_one = event,
    )]
    pub vault_state: Account<'info, VaultState>,

    /// The lamport purse being drained.
    #[account(
        mut,
        seeds = [VAULT_TREASURY_SEED, event.key().as_ref()],
        bump = vault_state.vault_treasury_bump,
    )]
    /// CHECK: lamports-only PDA controlled by this program.
    pub vault_treasury: AccountInfo<'info>,

    /// The settlement destination recorded at event creation.
    #[account(mut, address = event.settlement_treasury)]
    pub destination: SystemAccount<'info>,

    /// The event organizer. Their signature is required to settle.
    #[account(address = event.organizer @ EventFluxError::UnauthorizedOrganizer)]
    pub organizer: Signer<'info>,
}

/// Handles the logic for settling an event.
///
/// Settlement is terminal: the event is marked settled exactly once and the
/// treasury's entire lamport balance moves to the settlement destination.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
///
/// # Returns
///
/// An empty `Result` indicating success or failure.
pub fn withdraw_treasury_handler(ctx: Context<WithdrawTreasury>) -> Result<()> {
    let clock = Clock::get()?;
    ctx.accounts.event.mark_settled(clock.unix_timestamp)?;

    let balance = ctx.accounts.vault_treasury.lamports();
    require!(balance > 0, EventFluxError::NothingToWithdraw);

    **ctx.accounts.vault_treasury.try_borrow_mut_lamports()? -= balance;
    **ctx
        .accounts
        .destination
        .to_account_info()
        .try_borrow_mut_lamports()? += balance;

    ctx.accounts.vault_state.record_withdrawal(balance)?;

    emit!(TreasurySettled {
        event: ctx.accounts.event.key(),
        destination: ctx.accounts.destination.key(),
        amount: balance,
    });

    msg!("Settled {} lamports", balance);

    Ok(())
}
